use regex::Regex;

/// The kind of field, determining how it is edited and drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text input.
    TextInput,

    /// Single-line input that only accepts ASCII digits.
    NumberInput,

    /// Button-like entry; pressing Enter on it finishes the form.
    Selection,
}

impl FieldKind {
    /// Check if this kind holds editable text.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::TextInput | Self::NumberInput)
    }

    /// Check if this is a Selection.
    pub fn is_selection(&self) -> bool {
        matches!(self, Self::Selection)
    }
}

/// A single element of a form.
///
/// Descriptors are built once per form definition. The `value` is only the
/// initial value; the live value is owned by the running form.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    kind: FieldKind,

    /// Display label; for inputs also the key of the returned value.
    name: String,

    value: String,

    masked: bool,

    min_length: Option<usize>,

    max_length: Option<usize>,

    /// Must accept every valid prefix, since edits only ever append.
    pattern: Option<Regex>,

    gate: bool,
}

impl FieldDescriptor {
    fn new(kind: FieldKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            value: String::new(),
            masked: false,
            min_length: None,
            max_length: None,
            pattern: None,
            gate: false,
        }
    }

    /// Create a text input field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(FieldKind::TextInput, name)
    }

    /// Create a digits-only input field.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(FieldKind::NumberInput, name)
    }

    /// Create a selection (button) field.
    pub fn selection(name: impl Into<String>) -> Self {
        Self::new(FieldKind::Selection, name)
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Display every character as the mask glyph.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Require at least `len` characters before the gate opens.
    pub fn with_min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    /// Cap the value at `len` characters.
    pub fn with_max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Constrain the value to a prefix-closed pattern.
    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Mark this field as the gate of its form.
    pub fn gate(mut self) -> Self {
        self.gate = true;
        self
    }

    /// Get the field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the initial value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    pub fn is_gate(&self) -> bool {
        self.gate
    }

    /// Check whether `value` satisfies this field's minimum length.
    ///
    /// Fields without a minimum are always satisfied.
    pub fn satisfies_min_length(&self, value: &str) -> bool {
        self.min_length
            .is_none_or(|min| value.chars().count() >= min)
    }

    /// Check whether `value` is acceptable content for this field.
    ///
    /// Returns the reason when it is not. Used to vet initial values; the
    /// same rules guard every edit.
    pub fn check_value(&self, value: &str) -> Result<(), String> {
        if self.kind.is_selection() {
            return if value.is_empty() {
                Ok(())
            } else {
                Err("selections cannot hold a value".to_string())
            };
        }
        if self.kind == FieldKind::NumberInput && !value.chars().all(|c| c.is_ascii_digit()) {
            return Err("only digits are allowed".to_string());
        }
        if let Some(max) = self.max_length
            && value.chars().count() > max
        {
            return Err(format!("longer than {max} characters"));
        }
        if let Some(pattern) = &self.pattern
            && !value.is_empty()
            && !pattern.is_match(value)
        {
            return Err(format!("does not match pattern `{}`", pattern.as_str()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let field = FieldDescriptor::number("SSH Port")
            .with_value("22")
            .with_min_length(1)
            .with_max_length(5);

        assert_eq!(field.kind(), FieldKind::NumberInput);
        assert_eq!(field.name(), "SSH Port");
        assert_eq!(field.value(), "22");
        assert_eq!(field.min_length(), Some(1));
        assert_eq!(field.max_length(), Some(5));
        assert!(!field.is_masked());
        assert!(!field.is_gate());
    }

    #[test]
    fn kind_predicates() {
        assert!(FieldKind::TextInput.is_input());
        assert!(FieldKind::NumberInput.is_input());
        assert!(!FieldKind::Selection.is_input());
        assert!(FieldKind::Selection.is_selection());
    }

    #[test]
    fn min_length() {
        let field = FieldDescriptor::text("Name").with_min_length(2);
        assert!(!field.satisfies_min_length(""));
        assert!(!field.satisfies_min_length("a"));
        assert!(field.satisfies_min_length("ab"));

        let optional = FieldDescriptor::text("Note");
        assert!(optional.satisfies_min_length(""));
    }

    #[test]
    fn check_value_rules() {
        let port = FieldDescriptor::number("Port").with_max_length(5);
        assert!(port.check_value("22").is_ok());
        assert!(port.check_value("2a").is_err());
        assert!(port.check_value("123456").is_err());

        let user =
            FieldDescriptor::text("Username").with_pattern(Regex::new("^[a-z]+$").unwrap());
        assert!(user.check_value("").is_ok());
        assert!(user.check_value("root").is_ok());
        assert!(user.check_value("Root").is_err());

        let save = FieldDescriptor::selection(" Save ");
        assert!(save.check_value("").is_ok());
        assert!(save.check_value("x").is_err());
    }
}
