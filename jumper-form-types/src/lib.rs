//! Core types for the jumper form engine.
//!
//! This crate provides the foundational types for defining forms:
//! - `FormDefinition` - The validated, ordered list of fields plus frame chrome
//! - `FieldDescriptor` and `FieldKind` - Individual fields and their kinds
//! - `FormValues`, `FormSubmission` and `FormOutcome` - What a finished form hands back
//! - `Key` - The discrete key events a form reacts to
//! - `KeySource` and `FormBackend` traits - For feeding keys and implementing backends

mod field;
pub use field::{FieldDescriptor, FieldKind};

mod definition;
pub use definition::{DEFAULT_FRAME_WIDTH, FormDefinition};

mod key;
pub use key::Key;

mod values;
pub use values::{FormOutcome, FormSubmission, FormValues};

mod error;
pub use error::DefinitionError;

mod traits;
pub use traits::{FormBackend, KeySource};
