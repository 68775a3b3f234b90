use jumper_form_types::{FieldDescriptor, FieldKind, FormSubmission, FormValues};

/// A field of a running form: its descriptor plus the live value.
#[derive(Debug, Clone)]
pub struct LiveField {
    descriptor: FieldDescriptor,
    value: String,
}

impl LiveField {
    fn new(descriptor: FieldDescriptor) -> Self {
        let value = descriptor.value().to_string();
        Self { descriptor, value }
    }

    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    pub fn kind(&self) -> FieldKind {
        self.descriptor.kind()
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Length of the current value in characters.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_gate(&self) -> bool {
        self.descriptor.is_gate()
    }

    /// Text as it appears on screen, with masking applied.
    pub fn display(&self, mask_glyph: char) -> String {
        if self.descriptor.is_masked() {
            std::iter::repeat_n(mask_glyph, self.len()).collect()
        } else {
            self.value.clone()
        }
    }

    pub(crate) fn value_mut(&mut self) -> &mut String {
        &mut self.value
    }
}

/// The live model of one form session.
///
/// Built fresh for every session from the definition's descriptors, so no
/// edited value ever leaks into another form.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<LiveField>,
}

impl FormState {
    /// Create the state, seeding every value from its descriptor.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields: fields.into_iter().map(LiveField::new).collect(),
        }
    }

    pub fn fields(&self) -> &[LiveField] {
        &self.fields
    }

    pub fn field(&self, idx: usize) -> Option<&LiveField> {
        self.fields.get(idx)
    }

    pub(crate) fn field_mut(&mut self, idx: usize) -> Option<&mut LiveField> {
        self.fields.get_mut(idx)
    }

    /// Find the index of the named field.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    /// Get the current value of the named field.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name() == name)
            .map(LiveField::value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True iff every field with a minimum length currently meets it.
    pub fn all_required_satisfied(&self) -> bool {
        self.fields
            .iter()
            .all(|f| f.descriptor.satisfies_min_length(&f.value))
    }

    pub fn gate_index(&self) -> Option<usize> {
        self.fields.iter().position(LiveField::is_gate)
    }

    /// Index of the last field that is not a selection.
    pub fn last_input_index(&self) -> Option<usize> {
        self.fields.iter().rposition(|f| f.kind().is_input())
    }

    /// Collect every input value, reporting `action_idx` as the activated selection.
    pub fn submission(&self, action_idx: usize) -> FormSubmission {
        let values: FormValues = self
            .fields
            .iter()
            .filter(|f| f.kind().is_input())
            .map(|f| (f.name(), f.value()))
            .collect();

        FormSubmission {
            action: self
                .field(action_idx)
                .map(|f| f.name().to_string())
                .unwrap_or_default(),
            values,
        }
    }
}
