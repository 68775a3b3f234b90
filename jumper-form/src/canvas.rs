use std::io;

use ratatui::style::Style;

/// Cell-writing surface a form draws on.
///
/// Coordinates are relative to the frame interior: row 0, column 0 is the
/// first cell inside the border and padding. Implementations clip spans that
/// run past the interior width.
pub trait Canvas {
    /// Write `text` starting at (`row`, `column`) with the given style.
    fn write_span(&mut self, row: u16, column: u16, text: &str, style: Style) -> io::Result<()>;

    /// Move the text cursor to (`row`, `column`) and make it visible.
    fn show_cursor(&mut self, row: u16, column: u16) -> io::Result<()>;

    /// Hide the text cursor.
    fn hide_cursor(&mut self) -> io::Result<()>;

    /// Push buffered output to the screen.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn write_span(&mut self, row: u16, column: u16, text: &str, style: Style) -> io::Result<()> {
        (**self).write_span(row, column, text, style)
    }

    fn show_cursor(&mut self, row: u16, column: u16) -> io::Result<()> {
        (**self).show_cursor(row, column)
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        (**self).hide_cursor()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
