use std::collections::HashMap;

/// Final input values of a confirmed form, keyed by field name.
///
/// Only TextInput and NumberInput fields contribute; selections are reported
/// through [`FormSubmission::action`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    /// Create an empty value set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert a value for the named field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get the value of the named field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Check if the named field has a value.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Get an iterator over all name-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (k, v) in iter {
            values.insert(k, v);
        }
        values
    }
}

/// What a confirmed form hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    /// Name of the selection Enter was pressed on, e.g. `" Save "`.
    pub action: String,

    /// Values of every input field at the time of confirmation.
    pub values: FormValues,
}

impl FormSubmission {
    /// Check whether the form was confirmed through the named selection.
    ///
    /// Surrounding padding in selection names is ignored, so `" Save "`
    /// matches `"Save"`.
    pub fn is_action(&self, name: &str) -> bool {
        self.action.trim() == name.trim()
    }

    /// Get the value of the named field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }
}

/// Result of running a form to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Enter was pressed on a selection.
    Confirmed(FormSubmission),

    /// Escape was pressed on a form that allows cancelling.
    Cancelled,
}

impl FormOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Get the submission if the form was confirmed.
    pub fn submission(&self) -> Option<&FormSubmission> {
        match self {
            Self::Confirmed(submission) => Some(submission),
            Self::Cancelled => None,
        }
    }

    /// Consume the outcome, yielding the submission if the form was confirmed.
    pub fn into_submission(self) -> Option<FormSubmission> {
        match self {
            Self::Confirmed(submission) => Some(submission),
            Self::Cancelled => None,
        }
    }
}
