//! # jumper-form
//!
//! Keyboard-driven terminal forms. Backend-agnostic.
//!
//! A form is a flat list of typed fields: text inputs, digit-only inputs and
//! button-like selections. The engine lays the fields out inside a frame,
//! moves focus between them, edits the focused input in place and redraws
//! only the cells that changed. It never clears the screen while a form runs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jumper_form::{FieldDescriptor, FormBackend, FormDefinition};
//!
//! let definition = FormDefinition::new(vec![
//!     FieldDescriptor::text("Name").with_min_length(1),
//!     FieldDescriptor::selection(" Save ").gate(),
//!     FieldDescriptor::selection(" Back "),
//! ])?
//! .cancellable();
//!
//! let outcome = backend.show(definition)?;
//! ```
//!
//! ## Keys
//! - `Tab` / `Down` / `Enter` - next field (`Tab` wraps to the first field)
//! - `Up` - previous field; from a selection, the last input field
//! - `Left` / `Right` - between the two selections of a row
//! - `Enter` on a selection - confirm with that selection
//! - `Escape` - cancel, when the form allows it
//!
//! ## Backends
//!
//! Backends implement `FormBackend`:
//! - `jumper-form-crossterm` - real terminal via crossterm and ratatui
//! - [`TestBackend`] - scripted keys and an in-memory canvas

// Re-export all types from jumper-form-types
pub use jumper_form_types::*;

mod canvas;
pub use canvas::Canvas;

mod theme;
pub use theme::Theme;

mod state;
pub use state::{FormState, LiveField};

mod layout;
pub use layout::{
    Anchor, FRAME_CHROME, FRAME_CHROME_ROWS, LABEL_COLUMN, Layout, SELECTION_BLOCK_WIDTH,
};

pub mod navigation;

pub mod edit;

mod session;
pub use session::FormSession;

// Test backend for driving forms without a terminal
mod test_backend;
pub use test_backend::{CanvasOp, RecordingCanvas, ScriptedKeys, TestBackend, TestBackendError};
