//! A single run of a form against a key source and a canvas.

use std::io;

use jumper_form_types::{FieldKind, FormDefinition, FormOutcome, Key, KeySource};
use tracing::{debug, trace};

use crate::edit::{self, EditOutcome};
use crate::layout::label_text;
use crate::navigation::{self, Command};
use crate::{Canvas, FormState, LABEL_COLUMN, Layout, Theme};

fn column(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Key name for logs. Typed characters are never logged.
fn key_label(key: Key) -> &'static str {
    match key {
        Key::Up => "up",
        Key::Down => "down",
        Key::Left => "left",
        Key::Right => "right",
        Key::Tab => "tab",
        Key::Enter => "enter",
        Key::Escape => "escape",
        Key::Backspace => "backspace",
        Key::Char(_) => "char",
    }
}

/// The part of an input value that fits its anchor: the tail, when a stored
/// value is longer than the field.
fn visible_text(shown: &str, width: usize) -> String {
    let len = shown.chars().count();
    shown.chars().skip(len.saturating_sub(width)).collect()
}

/// One live form: state, layout cache and focus.
///
/// A session is built from a definition, owns its state exclusively and is
/// consumed by [`FormSession::run`]. Showing the same screen again means
/// building a new session.
#[derive(Debug)]
pub struct FormSession {
    state: FormState,
    layout: Layout,
    theme: Theme,
    focus: usize,
    cancellable: bool,
}

impl FormSession {
    /// Create a session for `definition` with the default theme.
    pub fn new(definition: FormDefinition) -> Self {
        let cancellable = definition.is_cancellable();
        let layout = Layout::compute(definition.fields(), definition.frame_width());
        Self {
            state: FormState::new(definition.into_fields()),
            layout,
            theme: Theme::default(),
            focus: 0,
            cancellable,
        }
    }

    /// Set a custom theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Rows the whole frame needs, chrome included.
    pub fn frame_height(&self) -> u16 {
        self.layout.interior_height() + crate::FRAME_CHROME_ROWS
    }

    /// Run the form until it is confirmed or cancelled.
    pub fn run<K, C>(mut self, keys: &mut K, canvas: &mut C) -> io::Result<FormOutcome>
    where
        K: KeySource + ?Sized,
        C: Canvas + ?Sized,
    {
        self.paint(canvas)?;
        loop {
            let key = keys.next_key()?;
            if let Some(outcome) = self.handle_key(key, canvas)? {
                canvas.hide_cursor()?;
                canvas.flush()?;
                return Ok(outcome);
            }
        }
    }

    /// Draw every field and place the initial focus.
    pub fn paint<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> io::Result<()> {
        for idx in 0..self.state.len() {
            if let Some(field) = self.state.field(idx)
                && field.kind().is_input()
                && let Some(anchor) = self.layout.anchor(idx)
            {
                canvas.write_span(
                    anchor.row,
                    LABEL_COLUMN,
                    &label_text(field.name()),
                    self.theme.label,
                )?;
            }
            self.paint_field(idx, false, canvas)?;
        }

        self.focus = navigation::resolve_target(&self.state, 0).unwrap_or(0);
        self.paint_field(self.focus, true, canvas)?;
        self.place_cursor(canvas)?;
        canvas.flush()
    }

    /// Process one key. Returns the outcome once the form is finished.
    pub fn handle_key<C: Canvas + ?Sized>(
        &mut self,
        key: Key,
        canvas: &mut C,
    ) -> io::Result<Option<FormOutcome>> {
        trace!(key = key_label(key), focus = self.focus, "key");
        match navigation::dispatch(&self.state, &self.layout, self.focus, key, self.cancellable) {
            Command::Confirm => {
                let submission = self.state.submission(self.focus);
                debug!(action = %submission.action, "form confirmed");
                Ok(Some(FormOutcome::Confirmed(submission)))
            }
            Command::Cancel => {
                debug!("form cancelled");
                Ok(Some(FormOutcome::Cancelled))
            }
            Command::Focus(target) => {
                self.move_focus(target, canvas)?;
                canvas.flush()?;
                Ok(None)
            }
            Command::Edit => {
                self.edit(key, canvas)?;
                canvas.flush()?;
                Ok(None)
            }
            Command::Ignore => Ok(None),
        }
    }

    fn move_focus<C: Canvas + ?Sized>(&mut self, target: usize, canvas: &mut C) -> io::Result<()> {
        let previous = self.focus;
        self.paint_field(previous, false, canvas)?;
        self.focus = target;
        self.paint_field(target, true, canvas)?;
        self.place_cursor(canvas)?;
        debug!(from = previous, to = target, "focus moved");
        Ok(())
    }

    fn edit<C: Canvas + ?Sized>(&mut self, key: Key, canvas: &mut C) -> io::Result<()> {
        let Some(anchor) = self.layout.anchor(self.focus) else {
            return Ok(());
        };
        let Some(field) = self.state.field_mut(self.focus) else {
            return Ok(());
        };

        let outcome = match key {
            Key::Backspace => edit::backspace(field),
            Key::Char(c) => edit::insert(field, c, usize::from(anchor.width)),
            _ => return Ok(()),
        };

        let len = field.len();
        let shown = field.display(self.theme.mask_glyph);
        let name = field.name().to_string();
        let end = anchor.start_column.saturating_add(column(len));

        match outcome {
            EditOutcome::Inserted(_) => {
                let last = shown.chars().last().map(String::from).unwrap_or_default();
                self.paint_gate(canvas)?;
                canvas.write_span(anchor.row, end - 1, &last, self.theme.input_focused)?;
                canvas.show_cursor(anchor.row, end)?;
                trace!(field = %name, len, "character inserted");
            }
            EditOutcome::Removed(_) if len >= usize::from(anchor.width) => {
                // still overflowing: the visible tail shifts by one
                self.paint_gate(canvas)?;
                self.paint_field(self.focus, true, canvas)?;
                self.place_cursor(canvas)?;
                trace!(field = %name, len, "character removed");
            }
            EditOutcome::Removed(_) => {
                // erase the vacated cell, repainting the new last character with it
                let (start, text) = match shown.chars().last() {
                    Some(last) => (end - 1, format!("{last} ")),
                    None => (end, " ".to_string()),
                };
                self.paint_gate(canvas)?;
                canvas.write_span(anchor.row, start, &text, self.theme.input_focused)?;
                canvas.show_cursor(anchor.row, end)?;
                trace!(field = %name, len, "character removed");
            }
            EditOutcome::Rejected(reason) => {
                debug!(field = %name, ?reason, "keystroke rejected");
            }
        }
        Ok(())
    }

    /// Redraw the gate in the style matching the required-field predicate.
    fn paint_gate<C: Canvas + ?Sized>(&self, canvas: &mut C) -> io::Result<()> {
        match self.state.gate_index() {
            Some(gate) if gate != self.focus => self.paint_field(gate, false, canvas),
            _ => Ok(()),
        }
    }

    fn paint_field<C: Canvas + ?Sized>(
        &self,
        idx: usize,
        focused: bool,
        canvas: &mut C,
    ) -> io::Result<()> {
        let (Some(field), Some(anchor)) = (self.state.field(idx), self.layout.anchor(idx)) else {
            return Ok(());
        };

        match field.kind() {
            FieldKind::TextInput | FieldKind::NumberInput => {
                let width = usize::from(anchor.width);
                let shown = visible_text(&field.display(self.theme.mask_glyph), width);
                let style = if focused {
                    self.theme.input_focused
                } else {
                    self.theme.input
                };
                canvas.write_span(
                    anchor.row,
                    anchor.start_column,
                    &format!("{shown:<width$}"),
                    style,
                )
            }
            FieldKind::Selection => {
                let style = if focused {
                    self.theme.selection_focused
                } else if field.is_gate() && !self.state.all_required_satisfied() {
                    self.theme.gate_disabled
                } else {
                    self.theme.selection
                };
                canvas.write_span(anchor.row, anchor.start_column, field.name(), style)
            }
        }
    }

    /// Show the cursor at the end of a focused input, hide it on a selection.
    ///
    /// The cursor never goes past the field, however long the value.
    fn place_cursor<C: Canvas + ?Sized>(&self, canvas: &mut C) -> io::Result<()> {
        match (self.state.field(self.focus), self.layout.anchor(self.focus)) {
            (Some(field), Some(anchor)) if field.kind().is_input() => canvas.show_cursor(
                anchor.row,
                anchor
                    .start_column
                    .saturating_add(column(field.len()).min(anchor.width)),
            ),
            _ => canvas.hide_cursor(),
        }
    }
}
