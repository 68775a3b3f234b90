use ratatui::style::{Color, Modifier, Style};

// 256-color palette entries used by the default theme.
const GREY19: Color = Color::Indexed(236);
const GREY23: Color = Color::Indexed(237);
const GREY35: Color = Color::Indexed(240);
const GREY70: Color = Color::Indexed(249);
const GREY85: Color = Color::Indexed(253);
const GREY93: Color = Color::Indexed(255);
const CORNSILK1: Color = Color::Indexed(230);
const WHITE: Color = Color::Indexed(15);

/// Styles used when drawing a form.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Field labels ("Name: ").
    pub label: Style,
    /// Input value area, unfocused.
    pub input: Style,
    /// Input value area, focused.
    pub input_focused: Style,
    /// Selection, unfocused.
    pub selection: Style,
    /// Selection, focused.
    pub selection_focused: Style,
    /// The gate while some required field is still too short.
    pub gate_disabled: Style,
    pub border: Style,
    pub title: Style,
    pub header: Style,
    pub footer: Style,
    /// Character shown in place of every character of a masked value.
    pub mask_glyph: char,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            label: Style::default(),
            input: Style::default().fg(GREY85).bg(GREY19),
            input_focused: Style::default().fg(Color::Black).bg(GREY93),
            selection: Style::default().fg(WHITE).bg(GREY35),
            selection_focused: Style::default().fg(Color::Black).bg(GREY85),
            gate_disabled: Style::default().fg(GREY70).bg(GREY23),
            border: Style::default(),
            title: Style::default().add_modifier(Modifier::BOLD),
            header: Style::default().fg(GREY93),
            footer: Style::default().fg(CORNSILK1),
            mask_glyph: '*',
        }
    }
}

impl Theme {
    /// Set the mask glyph.
    pub fn with_mask_glyph(mut self, glyph: char) -> Self {
        self.mask_glyph = glyph;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.mask_glyph, '*');
        assert_eq!(theme.input_focused.bg, Some(GREY93));
        assert_ne!(theme.selection, theme.gate_disabled);
    }

    #[test]
    fn custom_glyph() {
        let theme = Theme::default().with_mask_glyph('•');
        assert_eq!(theme.mask_glyph, '•');
    }
}
