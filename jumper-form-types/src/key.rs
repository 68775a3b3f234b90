/// A single discrete key press, as delivered to a running form.
///
/// Key sources map their native events onto these; anything a form does not
/// react to is never delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Tab,
    Enter,
    Escape,
    Backspace,
    /// A character key, possibly a control character.
    Char(char),
}

impl Key {
    /// Keys for typing `text` one character at a time.
    pub fn typed(text: &str) -> impl Iterator<Item = Key> + '_ {
        text.chars().map(Key::Char)
    }
}
