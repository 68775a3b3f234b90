use std::io;

use crate::{FormDefinition, FormOutcome, Key};

/// Source of key presses for a running form.
///
/// Each call blocks until exactly one key is available. Repeats are not
/// coalesced.
pub trait KeySource {
    /// Wait for the next key.
    fn next_key(&mut self) -> io::Result<Key>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn next_key(&mut self) -> io::Result<Key> {
        (**self).next_key()
    }
}

/// Trait for backend implementations that show a form and collect its outcome.
///
/// Backends receive a `FormDefinition` and decide how to present it
/// (a real terminal, a scripted test harness, ...). Each call runs one
/// independent form session.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Show a form and block until it is confirmed or cancelled.
    ///
    /// # Returns
    /// * `Ok(FormOutcome::Confirmed(..))` when Enter was pressed on a selection
    /// * `Ok(FormOutcome::Cancelled)` when Escape was pressed on a cancellable form
    /// * `Err` on backend failure
    fn show(&self, definition: FormDefinition) -> Result<FormOutcome, Self::Error>;
}
