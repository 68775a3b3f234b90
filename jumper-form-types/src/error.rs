/// Error type for malformed form definitions.
///
/// These are construction-time contract violations. A definition that was
/// built successfully never produces one of these while the form runs.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// The form has no fields at all.
    #[error("Form has no fields")]
    Empty,

    /// The form has no selection, so it could never be confirmed.
    #[error("Form has no selection to confirm with")]
    NoSelection,

    /// More than one field is marked as the gate.
    #[error("Form declares more than one gate: {}", .0.join(", "))]
    MultipleGates(Vec<String>),

    /// The gate must be a selection.
    #[error("Gate field '{0}' is not a selection")]
    GateNotSelection(String),

    /// Two fields share a name, so their values could not be told apart.
    #[error("Duplicate field name '{0}'")]
    DuplicateName(String),

    /// An initial value violates the field's own constraints.
    #[error("Invalid initial value for '{field}': {reason}")]
    InvalidInitialValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = DefinitionError::MultipleGates(vec!["A".into(), "B".into()]);
        assert_eq!(err.to_string(), "Form declares more than one gate: A, B");

        let err = DefinitionError::InvalidInitialValue {
            field: "Port".into(),
            reason: "only digits are allowed".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid initial value for 'Port': only digits are allowed"
        );
    }
}
