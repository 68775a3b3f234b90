//! Test backend for driving forms without a terminal.
//!
//! `TestBackend` runs real form sessions against a scripted key sequence and
//! an in-memory canvas. Keys are consumed across calls, so code that shows
//! several forms in a row can be driven by one script.
//!
//! # Example
//!
//! ```rust,ignore
//! use jumper_form::{FieldDescriptor, FormBackend, FormDefinition, Key, TestBackend};
//!
//! let backend = TestBackend::new()
//!     .with_typed("box")
//!     .with_keys([Key::Tab, Key::Enter]);
//!
//! let outcome = backend.show(FormDefinition::new(vec![
//!     FieldDescriptor::text("Name"),
//!     FieldDescriptor::selection("Ok"),
//! ])?)?;
//!
//! assert_eq!(outcome.submission().unwrap().value("Name"), Some("box"));
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use jumper_form_types::{FormBackend, FormDefinition, FormOutcome, Key, KeySource};
use ratatui::style::Style;

use crate::{Canvas, FormSession, Layout, Theme};

/// Key source that replays a fixed sequence.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Append more keys to the script.
    pub fn push(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.keys.extend(keys);
    }

    /// Number of keys not yet delivered.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted")
        })
    }
}

/// A single call made against a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Write {
        row: u16,
        column: u16,
        text: String,
        style: Style,
    },
    ShowCursor {
        row: u16,
        column: u16,
    },
    HideCursor,
}

/// Canvas that keeps a cell grid in memory and logs every call.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: u16,
    cells: Vec<Vec<(char, Style)>>,
    cursor: Option<(u16, u16)>,
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    /// Create a blank canvas of `width` x `height` interior cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            cells: vec![vec![(' ', Style::default()); usize::from(width)]; usize::from(height)],
            cursor: None,
            ops: Vec::new(),
        }
    }

    /// Create a canvas sized to fit `layout`.
    pub fn for_layout(layout: &Layout) -> Self {
        Self::new(layout.interior_width(), layout.interior_height())
    }

    /// Text of one interior row, blanks included.
    pub fn row_text(&self, row: u16) -> String {
        self.cells
            .get(usize::from(row))
            .map(|cells| cells.iter().map(|(c, _)| *c).collect())
            .unwrap_or_default()
    }

    /// Style of one cell, if it is inside the canvas.
    pub fn style_at(&self, row: u16, column: u16) -> Option<Style> {
        self.cells
            .get(usize::from(row))?
            .get(usize::from(column))
            .map(|(_, style)| *style)
    }

    /// Cursor position, or `None` while the cursor is hidden.
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Forget the logged calls, keeping the drawn cells.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn write_span(&mut self, row: u16, column: u16, text: &str, style: Style) -> io::Result<()> {
        self.ops.push(CanvasOp::Write {
            row,
            column,
            text: text.to_string(),
            style,
        });
        if let Some(cells) = self.cells.get_mut(usize::from(row)) {
            for (offset, c) in text.chars().enumerate() {
                let col = usize::from(column) + offset;
                if col >= usize::from(self.width) {
                    break;
                }
                cells[col] = (c, style);
            }
        }
        Ok(())
    }

    fn show_cursor(&mut self, row: u16, column: u16) -> io::Result<()> {
        self.ops.push(CanvasOp::ShowCursor { row, column });
        self.cursor = Some((row, column));
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.ops.push(CanvasOp::HideCursor);
        self.cursor = None;
        Ok(())
    }
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    /// The script ran out before the form finished.
    #[error("Key script exhausted before the form finished")]
    ScriptExhausted,

    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for TestBackendError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::ScriptExhausted,
            _ => Self::Io(err),
        }
    }
}

/// A backend that feeds scripted keys to real form sessions.
///
/// The canvas of the most recent form is kept for inspection.
#[derive(Debug, Default)]
pub struct TestBackend {
    keys: RefCell<ScriptedKeys>,
    theme: Theme,
    last_canvas: RefCell<Option<RecordingCanvas>>,
    shown: RefCell<Vec<Option<String>>>,
}

impl TestBackend {
    /// Create a test backend with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append keys to the script.
    pub fn with_keys(self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.borrow_mut().push(keys);
        self
    }

    /// Append one key to the script.
    pub fn with_key(self, key: Key) -> Self {
        self.with_keys([key])
    }

    /// Append keys typing `text`.
    pub fn with_typed(self, text: &str) -> Self {
        self.with_keys(Key::typed(text))
    }

    /// Set a custom theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Canvas of the most recently shown form.
    pub fn last_canvas(&self) -> Option<RecordingCanvas> {
        self.last_canvas.borrow().clone()
    }

    /// Headers of every form shown so far, in order.
    pub fn shown_headers(&self) -> Vec<Option<String>> {
        self.shown.borrow().clone()
    }

    /// Number of scripted keys not yet consumed.
    pub fn remaining_keys(&self) -> usize {
        self.keys.borrow().remaining()
    }
}

impl FormBackend for TestBackend {
    type Error = TestBackendError;

    fn show(&self, definition: FormDefinition) -> Result<FormOutcome, Self::Error> {
        self.shown.borrow_mut().push(definition.header.clone());

        let session = FormSession::new(definition).with_theme(self.theme.clone());
        let mut canvas = RecordingCanvas::for_layout(session.layout());
        let result = session.run(&mut *self.keys.borrow_mut(), &mut canvas);
        *self.last_canvas.borrow_mut() = Some(canvas);

        Ok(result?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_keys_run_out() {
        let mut keys = ScriptedKeys::new([Key::Tab]);
        assert_eq!(keys.next_key().unwrap(), Key::Tab);
        let err = keys.next_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn canvas_clips_at_width() {
        let mut canvas = RecordingCanvas::new(4, 1);
        canvas.write_span(0, 2, "abcdef", Style::default()).unwrap();
        assert_eq!(canvas.row_text(0), "  ab");
        assert_eq!(canvas.style_at(0, 4), None);
        assert_eq!(canvas.row_text(5), "");
    }

    #[test]
    fn error_types() {
        let err = TestBackendError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert!(matches!(err, TestBackendError::ScriptExhausted));
        assert_eq!(
            err.to_string(),
            "Key script exhausted before the form finished"
        );

        let err = TestBackendError::from(io::Error::other("boom"));
        assert_eq!(err.to_string(), "I/O error: boom");
    }
}
