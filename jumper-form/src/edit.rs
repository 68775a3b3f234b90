//! In-place editing of input values.
//!
//! Edits only ever append or drop the last character. Every check runs
//! before the value is committed, so a rejected key leaves the field exactly
//! as it was.

use jumper_form_types::FieldKind;

use crate::LiveField;

/// Why a keystroke did not change the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The field is a selection.
    NotEditable,
    /// Control characters are never inserted.
    Control,
    /// Number inputs only take digits.
    NotDigit,
    /// The value already fills its maximum length or the visible width.
    Full,
    /// The value would no longer match the field's pattern.
    Pattern,
    /// Backspace on an empty value.
    Empty,
}

/// Result of applying one key to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Inserted(char),
    Removed(char),
    Rejected(Rejection),
}

/// Append `c` to the field's value.
///
/// `available` is the number of cells the value may occupy on screen; the
/// effective limit is the smaller of it and the field's maximum length.
pub fn insert(field: &mut LiveField, c: char, available: usize) -> EditOutcome {
    let descriptor = field.descriptor();
    match descriptor.kind() {
        FieldKind::Selection => return EditOutcome::Rejected(Rejection::NotEditable),
        FieldKind::NumberInput if !c.is_control() && !c.is_ascii_digit() => {
            return EditOutcome::Rejected(Rejection::NotDigit);
        }
        FieldKind::TextInput | FieldKind::NumberInput => {}
    }
    if c.is_control() {
        return EditOutcome::Rejected(Rejection::Control);
    }

    let limit = descriptor
        .max_length()
        .map_or(available, |max| max.min(available));
    if field.len() >= limit {
        return EditOutcome::Rejected(Rejection::Full);
    }

    let pattern = descriptor.pattern().cloned();
    let value = field.value_mut();
    value.push(c);
    if let Some(pattern) = pattern
        && !pattern.is_match(value)
    {
        value.pop();
        return EditOutcome::Rejected(Rejection::Pattern);
    }

    EditOutcome::Inserted(c)
}

/// Drop the last character of the field's value.
pub fn backspace(field: &mut LiveField) -> EditOutcome {
    if field.kind().is_selection() {
        return EditOutcome::Rejected(Rejection::NotEditable);
    }
    match field.value_mut().pop() {
        Some(c) => EditOutcome::Removed(c),
        None => EditOutcome::Rejected(Rejection::Empty),
    }
}
