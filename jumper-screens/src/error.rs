use jumper_form::DefinitionError;
use thiserror::Error;

/// Error type for the jumper screens.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// A screen built an invalid form, e.g. from a stored value that breaks
    /// a field's pattern.
    #[error("Invalid form definition: {0}")]
    Definition(#[from] DefinitionError),

    /// A field pattern failed to compile.
    #[error("Invalid field pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The backend failed to show the form.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
