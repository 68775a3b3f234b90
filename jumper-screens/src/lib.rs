//! # jumper-screens
//!
//! The screens of the jumper utility, each a list of field descriptors plus
//! the handling of the confirmed values.
//!
//! Every screen takes any [`FormBackend`](jumper_form::FormBackend), so the
//! same code runs against a real terminal or a scripted `TestBackend`.
//!
//! ```rust,ignore
//! use jumper_form_crossterm::CrosstermFormBackend;
//! use jumper_screens::{EntryAction, Location, edit_entry};
//!
//! let mut location = Location::new("web", "deploy", "10.0.0.1", 22);
//! match edit_entry(&CrosstermFormBackend::new(), &mut location)? {
//!     EntryAction::Saved => println!("saved {location:?}"),
//!     EntryAction::DeleteRequested => println!("delete {}?", location.name),
//!     EntryAction::Unchanged => {}
//! }
//! ```

mod admin_password;
mod entry;
mod error;

pub use admin_password::{ADMIN_PASSWORD, admin_password_form, set_admin_password};
pub use entry::{EntryAction, EntryFields, Location, create_entry, edit_entry, entry_form};
pub use error::ScreenError;

use jumper_form::{FormBackend, FormDefinition, FormOutcome};

/// Header shown on the entry screens.
pub fn version_header() -> String {
    format!("jumper v{}", env!("CARGO_PKG_VERSION"))
}

fn show<B: FormBackend>(backend: &B, definition: FormDefinition) -> Result<FormOutcome, ScreenError> {
    backend
        .show(definition)
        .map_err(|err| ScreenError::Backend(err.into()))
}
