//! Crossterm implementation of the FormBackend trait.
//!
//! Draws the frame once and then forwards the engine's single-cell writes to
//! the terminal.

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use jumper_form::{
    Canvas, FRAME_CHROME, FormBackend, FormDefinition, FormOutcome, FormSession, Theme,
};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    buffer::Cell,
    layout::{Alignment, Position, Rect},
    prelude::CrosstermBackend,
    style::Style,
    text::Line,
    widgets::{Block, Clear, Paragraph},
};
use std::fmt;
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

use crate::CrosstermKeys;

/// Error type for the crossterm form backend.
#[derive(Debug, Error)]
pub enum CrosstermFormError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error, or a terminal too small for the form.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

fn backend_error<E: fmt::Display>(err: E) -> io::Error {
    io::Error::other(err.to_string())
}

/// Centre a `width` x `height` frame inside `area`, shrinking it if needed.
pub fn frame_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Top-left interior cell of a frame: inside the border and the header row.
fn interior_origin(rect: Rect) -> Position {
    Position::new(rect.x.saturating_add(2), rect.y.saturating_add(2))
}

/// Text drawn around the fields.
#[derive(Debug, Clone, Default)]
struct Chrome {
    title: Option<String>,
    header: Option<String>,
    footer: Option<String>,
}

impl Chrome {
    fn of(definition: &FormDefinition) -> Self {
        Self {
            title: definition.title.clone(),
            header: definition.header.clone(),
            footer: definition.footer.clone(),
        }
    }
}

fn draw_frame(frame: &mut Frame, rect: Rect, chrome: &Chrome, theme: &Theme) {
    frame.render_widget(Clear, rect);

    let mut block = Block::bordered().border_style(theme.border);
    if let Some(title) = &chrome.title {
        block = block
            .title(Line::styled(format!(" {title} "), theme.title))
            .title_alignment(Alignment::Center);
    }
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    if inner.height == 0 {
        return;
    }
    let line = |y: u16| Rect {
        y,
        height: 1,
        ..inner
    };

    if let Some(header) = &chrome.header {
        let header = Paragraph::new(header.as_str())
            .style(theme.header)
            .alignment(Alignment::Center);
        frame.render_widget(header, line(inner.y));
    }
    if let Some(footer) = &chrome.footer {
        let footer = Paragraph::new(footer.as_str())
            .style(theme.footer)
            .alignment(Alignment::Center);
        frame.render_widget(footer, line(inner.bottom() - 1));
    }
}

/// Canvas writing straight to a ratatui backend, offset to a frame interior.
///
/// Writes past the interior width are clipped.
pub struct CrosstermCanvas<'a, B: Backend> {
    backend: &'a mut B,
    origin: Position,
    width: u16,
}

impl<'a, B: Backend> CrosstermCanvas<'a, B> {
    pub fn new(backend: &'a mut B, origin: Position, width: u16) -> Self {
        Self {
            backend,
            origin,
            width,
        }
    }
}

impl<B: Backend> fmt::Debug for CrosstermCanvas<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrosstermCanvas")
            .field("origin", &self.origin)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

impl<B: Backend> Canvas for CrosstermCanvas<'_, B> {
    fn write_span(&mut self, row: u16, column: u16, text: &str, style: Style) -> io::Result<()> {
        let y = self.origin.y.saturating_add(row);
        let cells: Vec<(u16, u16, Cell)> = (column..self.width)
            .zip(text.chars())
            .map(|(col, c)| {
                let mut cell = Cell::default();
                cell.set_char(c).set_style(style);
                (self.origin.x.saturating_add(col), y, cell)
            })
            .collect();
        self.backend
            .draw(cells.iter().map(|(x, y, cell)| (*x, *y, cell)))
            .map_err(backend_error)
    }

    fn show_cursor(&mut self, row: u16, column: u16) -> io::Result<()> {
        let position = Position::new(
            self.origin.x.saturating_add(column),
            self.origin.y.saturating_add(row),
        );
        self.backend
            .set_cursor_position(position)
            .map_err(backend_error)?;
        self.backend.show_cursor().map_err(backend_error)
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.backend.hide_cursor().map_err(backend_error)
    }

    fn flush(&mut self) -> io::Result<()> {
        Backend::flush(self.backend).map_err(backend_error)
    }
}

/// Form backend for a real terminal.
///
/// Each `show` enters the alternate screen, draws one framed form centred in
/// the terminal and restores the terminal before returning.
#[derive(Debug, Clone, Default)]
pub struct CrosstermFormBackend {
    theme: Theme,
}

impl CrosstermFormBackend {
    /// Create a new crossterm form backend with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, CrosstermFormError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), CrosstermFormError> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        definition: FormDefinition,
    ) -> Result<FormOutcome, CrosstermFormError> {
        let chrome = Chrome::of(&definition);
        let session = FormSession::new(definition).with_theme(self.theme.clone());
        let interior_width = session.layout().interior_width();
        let width = interior_width + FRAME_CHROME;
        let height = session.frame_height();

        let size = terminal.size()?;
        if size.width < width || size.height < height {
            return Err(CrosstermFormError::Terminal(format!(
                "terminal is {}x{}, form needs {width}x{height}",
                size.width, size.height
            )));
        }

        let rect = frame_rect(Rect::new(0, 0, size.width, size.height), width, height);
        terminal.clear()?;
        terminal.draw(|frame| draw_frame(frame, rect, &chrome, &self.theme))?;
        debug!(width, height, x = rect.x, y = rect.y, "frame drawn");

        let mut canvas =
            CrosstermCanvas::new(terminal.backend_mut(), interior_origin(rect), interior_width);
        Ok(session.run(&mut CrosstermKeys::new(), &mut canvas)?)
    }
}

impl FormBackend for CrosstermFormBackend {
    type Error = CrosstermFormError;

    fn show(&self, definition: FormDefinition) -> Result<FormOutcome, Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let result = self.run(&mut terminal, definition);
        let restored = self.restore_terminal(&mut terminal);

        let outcome = result?;
        restored?;
        debug!(cancelled = outcome.is_cancelled(), "form closed");
        Ok(outcome)
    }
}
