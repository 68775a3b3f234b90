//! Crossterm key events as form keys.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use jumper_form::{Key, KeySource};
use tracing::trace;

/// Translate one crossterm key event.
///
/// Releases, repeats of other kinds and keys a form never reacts to map to
/// `None`. Characters typed with Ctrl or Alt held are dropped as well,
/// unless both are held together.
pub fn map_key(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let key = match event.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Tab => Key::Tab,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        // AltGr arrives as Ctrl+Alt and still types a character
        KeyCode::Char(_)
            if event.modifiers.contains(KeyModifiers::CONTROL)
                != event.modifiers.contains(KeyModifiers::ALT) =>
        {
            return None;
        }
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    };
    Some(key)
}

/// Blocking key source reading from the terminal.
///
/// Expects raw mode to be enabled by the caller.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(event) = event::read()?
                && let Some(key) = map_key(event)
            {
                return Ok(key);
            }
            trace!("event skipped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(Key::Up));
        assert_eq!(map_key(press(KeyCode::Tab)), Some(Key::Tab));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Key::Escape));
        assert_eq!(map_key(press(KeyCode::Backspace)), Some(Key::Backspace));
    }

    #[test]
    fn characters() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), Some(Key::Char('x')));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            Some(Key::Char('X'))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn altgr_characters_are_typed() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for c in ['@', '\\', '|', '€'] {
            assert_eq!(map_key(KeyEvent::new(KeyCode::Char(c), altgr)), Some(Key::Char(c)));
        }
        assert_eq!(
            map_key(KeyEvent::new(
                KeyCode::Char('{'),
                altgr | KeyModifiers::SHIFT
            )),
            Some(Key::Char('{'))
        );
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(map_key(press(KeyCode::Delete)), None);
        assert_eq!(map_key(press(KeyCode::BackTab)), None);
        assert_eq!(map_key(press(KeyCode::F(10))), None);
    }

    #[test]
    fn releases_are_dropped() {
        let mut event = press(KeyCode::Enter);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event), None);
    }
}
