use std::collections::HashSet;

use crate::{DefinitionError, FieldDescriptor};

/// Frame width, in columns, used when a definition does not set one.
pub const DEFAULT_FRAME_WIDTH: u16 = 52;

/// The validated structure of one form screen.
///
/// A definition is presentation-agnostic: it lists the fields in navigation
/// order and carries the frame chrome text. It is checked once, at
/// construction, so a running form never has to deal with a malformed one.
#[derive(Debug, Clone)]
pub struct FormDefinition {
    /// Text shown in the top border of the frame.
    pub title: Option<String>,

    /// Line shown centered above the fields.
    pub header: Option<String>,

    /// Line shown centered below the fields.
    pub footer: Option<String>,

    fields: Vec<FieldDescriptor>,

    frame_width: u16,

    cancellable: bool,
}

impl FormDefinition {
    /// Create a form definition from an ordered field list.
    ///
    /// # Errors
    /// Fails when the list is empty, has no selection to finish on, declares
    /// more than one gate, marks a non-selection as gate, repeats a name, or
    /// carries an initial value its own constraints would reject.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, DefinitionError> {
        if fields.is_empty() {
            return Err(DefinitionError::Empty);
        }
        if !fields.iter().any(|f| f.kind().is_selection()) {
            return Err(DefinitionError::NoSelection);
        }

        let gates: Vec<&FieldDescriptor> = fields.iter().filter(|f| f.is_gate()).collect();
        if gates.len() > 1 {
            return Err(DefinitionError::MultipleGates(
                gates.iter().map(|f| f.name().to_string()).collect(),
            ));
        }
        if let Some(gate) = gates.first()
            && !gate.kind().is_selection()
        {
            return Err(DefinitionError::GateNotSelection(gate.name().to_string()));
        }

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(DefinitionError::DuplicateName(field.name().to_string()));
            }
            field
                .check_value(field.value())
                .map_err(|reason| DefinitionError::InvalidInitialValue {
                    field: field.name().to_string(),
                    reason,
                })?;
        }

        Ok(Self {
            title: None,
            header: None,
            footer: None,
            fields,
            frame_width: DEFAULT_FRAME_WIDTH,
            cancellable: false,
        })
    }

    /// Set the frame title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the header line.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the footer line.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Set the frame width in columns, borders included.
    pub fn with_frame_width(mut self, width: u16) -> Self {
        self.frame_width = width;
        self
    }

    /// Allow Escape to abandon the form.
    pub fn cancellable(mut self) -> Self {
        self.cancellable = true;
        self
    }

    /// Get the fields in navigation order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Consume the definition, yielding its fields.
    pub fn into_fields(self) -> Vec<FieldDescriptor> {
        self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn frame_width(&self) -> u16 {
        self.frame_width
    }

    pub fn is_cancellable(&self) -> bool {
        self.cancellable
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a constructed definition; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
