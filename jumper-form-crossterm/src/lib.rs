//! # jumper-form-crossterm
//!
//! Real-terminal backend for jumper-form.
//!
//! The frame (border, title, header and footer) is drawn once through a
//! ratatui `Terminal`. While the form runs, only the cells the engine asks
//! for are written, straight to the crossterm backend, so nothing flickers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jumper_form::{FieldDescriptor, FormBackend, FormDefinition};
//! use jumper_form_crossterm::CrosstermFormBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let definition = FormDefinition::new(vec![
//!         FieldDescriptor::text("Name").with_min_length(1),
//!         FieldDescriptor::selection(" Save ").gate(),
//!         FieldDescriptor::selection(" Back "),
//!     ])?
//!     .with_title("jumper")
//!     .cancellable();
//!
//!     let outcome = CrosstermFormBackend::new().show(definition)?;
//!     println!("{outcome:#?}");
//!     Ok(())
//! }
//! ```

mod backend;
mod keys;

pub use backend::{CrosstermCanvas, CrosstermFormBackend, CrosstermFormError, frame_rect};
pub use keys::{CrosstermKeys, map_key};
