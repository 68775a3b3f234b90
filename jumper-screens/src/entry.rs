//! Create and edit screens for jump entries.

use std::fmt;

use jumper_form::{FieldDescriptor, FormBackend, FormDefinition, FormOutcome, FormSubmission};
use regex::Regex;
use tracing::{debug, info};

use crate::{ScreenError, show, version_header};

const NAME: &str = "Name";
const USERNAME: &str = "Username";
const IP_ADDRESS: &str = "IP Address";
const SSH_PORT: &str = "SSH Port";

const SAVE: &str = " Save ";
const DELETE: &str = " Delete ";
const BACK: &str = " Back ";

const USERNAME_PATTERN: &str = "^[a-z][a-z0-9_-]{0,31}$";
/// Host names and addresses: letters, digits, '-' and '.', never two dots in
/// a row. Written so that every prefix of a valid value also matches.
const HOST_PATTERN: &str = r"^\.?(?:[A-Za-z0-9-]+\.?)*$";

const DEFAULT_PORT: u16 = 22;
const PORT_ERROR: &str = "Port must be between 1 and 65535";
const FOOTER: &str = "Press Escape to return to menu";

/// A jump target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub username: String,
    pub ip: String,
    pub port: u16,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        ip: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            ip: ip.into(),
            port,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.username, self.ip, self.port)
    }
}

/// Raw values of the entry form, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields {
    pub name: String,
    pub username: String,
    pub ip: String,
    pub port: String,
}

impl Default for EntryFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            username: String::new(),
            ip: String::new(),
            port: DEFAULT_PORT.to_string(),
        }
    }
}

impl From<&Location> for EntryFields {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            username: location.username.clone(),
            ip: location.ip.clone(),
            port: location.port.to_string(),
        }
    }
}

impl EntryFields {
    fn from_submission(submission: &FormSubmission) -> Self {
        let value = |name: &str| submission.value(name).unwrap_or_default().to_string();
        Self {
            name: value(NAME),
            username: value(USERNAME),
            ip: value(IP_ADDRESS),
            port: value(SSH_PORT),
        }
    }

    /// Turn the typed values into a location.
    ///
    /// The form already guarantees digits only; the range is checked here.
    pub fn to_location(&self) -> Result<Location, String> {
        let port = self
            .port
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| PORT_ERROR.to_string())?;
        Ok(Location::new(&self.name, &self.username, &self.ip, port))
    }
}

/// Build the entry form.
///
/// `secondary` is the selection paired with Save. `error`, when set,
/// replaces the version header.
pub fn entry_form(
    title: &str,
    fields: &EntryFields,
    secondary: &str,
    error: Option<&str>,
) -> Result<FormDefinition, ScreenError> {
    let definition = FormDefinition::new(vec![
        FieldDescriptor::text(NAME)
            .with_min_length(1)
            .with_value(&fields.name),
        FieldDescriptor::text(USERNAME)
            .with_pattern(Regex::new(USERNAME_PATTERN)?)
            .with_min_length(1)
            .with_value(&fields.username),
        FieldDescriptor::text(IP_ADDRESS)
            .with_pattern(Regex::new(HOST_PATTERN)?)
            .with_min_length(1)
            .with_value(&fields.ip),
        FieldDescriptor::number(SSH_PORT)
            .with_max_length(5)
            .with_min_length(1)
            .with_value(&fields.port),
        FieldDescriptor::selection(SAVE).gate(),
        FieldDescriptor::selection(secondary),
    ])?;

    Ok(definition
        .with_title(title)
        .with_header(error.map_or_else(version_header, str::to_string))
        .with_footer(FOOTER)
        .cancellable())
}

/// What the edit screen did with the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    /// The edited values were written into the location.
    Saved,
    /// The operator asked to delete the location; confirming is up to the
    /// caller.
    DeleteRequested,
    /// The operator left with Escape.
    Unchanged,
}

/// How an entry form run ended.
enum Ending {
    Saved(Location),
    Secondary,
    Cancelled,
}

/// Show the form until Save yields a valid location or the operator leaves.
///
/// A Save with an out-of-range port shows the form again with the typed
/// values and the error in the header.
fn run_until_valid<B: FormBackend>(
    backend: &B,
    title: &str,
    mut fields: EntryFields,
    secondary: &str,
) -> Result<Ending, ScreenError> {
    let mut error: Option<String> = None;
    loop {
        let definition = entry_form(title, &fields, secondary, error.as_deref())?;
        let submission = match show(backend, definition)? {
            FormOutcome::Cancelled => return Ok(Ending::Cancelled),
            FormOutcome::Confirmed(submission) if !submission.is_action(SAVE) => {
                return Ok(Ending::Secondary);
            }
            FormOutcome::Confirmed(submission) => submission,
        };

        fields = EntryFields::from_submission(&submission);
        match fields.to_location() {
            Ok(location) => return Ok(Ending::Saved(location)),
            Err(message) => {
                debug!(port = %fields.port, "entry rejected");
                error = Some(message);
            }
        }
    }
}

/// Edit a location in place.
///
/// Save writes the values back. Delete and Escape leave the location as it
/// was, whatever was typed.
pub fn edit_entry<B: FormBackend>(
    backend: &B,
    location: &mut Location,
) -> Result<EntryAction, ScreenError> {
    match run_until_valid(backend, "Edit Entry", EntryFields::from(&*location), DELETE)? {
        Ending::Saved(edited) => {
            info!(name = %edited.name, location = %edited, "entry saved");
            *location = edited;
            Ok(EntryAction::Saved)
        }
        Ending::Secondary => {
            debug!(name = %location.name, "delete requested");
            Ok(EntryAction::DeleteRequested)
        }
        Ending::Cancelled => Ok(EntryAction::Unchanged),
    }
}

/// Ask for a new location. `None` on Back or Escape.
pub fn create_entry<B: FormBackend>(backend: &B) -> Result<Option<Location>, ScreenError> {
    match run_until_valid(backend, "Create Entry", EntryFields::default(), BACK)? {
        Ending::Saved(location) => {
            info!(name = %location.name, location = %location, "entry created");
            Ok(Some(location))
        }
        Ending::Secondary | Ending::Cancelled => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_range() {
        let mut fields = EntryFields {
            name: "web".into(),
            username: "deploy".into(),
            ip: "10.0.0.1".into(),
            port: "2222".into(),
        };
        assert_eq!(fields.to_location().unwrap().port, 2222);

        fields.port = "0".into();
        assert_eq!(fields.to_location().unwrap_err(), PORT_ERROR);
        fields.port = "65536".into();
        assert_eq!(fields.to_location().unwrap_err(), PORT_ERROR);
        fields.port = String::new();
        assert!(fields.to_location().is_err());
    }

    #[test]
    fn host_pattern() {
        let host = Regex::new(HOST_PATTERN).unwrap();
        for ok in ["10.0.0.1", "db-1.internal", ".local", "10."] {
            assert!(host.is_match(ok), "{ok}");
        }
        for bad in ["10..1", "a b", "..", "host_name"] {
            assert!(!host.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn form_shape() {
        let form = entry_form("Edit Entry", &EntryFields::default(), DELETE, None).unwrap();
        assert!(form.is_cancellable());
        assert_eq!(form.field(SSH_PORT).unwrap().value(), "22");
        assert_eq!(form.header, Some(version_header()));
        assert_eq!(form.footer.as_deref(), Some(FOOTER));

        let form =
            entry_form("Edit Entry", &EntryFields::default(), DELETE, Some(PORT_ERROR)).unwrap();
        assert_eq!(form.header.as_deref(), Some(PORT_ERROR));
    }

    #[test]
    fn stored_values_are_checked() {
        let location = Location::new("web", "Deploy", "10.0.0.1", 22);
        let err = entry_form("Edit Entry", &EntryFields::from(&location), DELETE, None);
        assert!(matches!(err, Err(ScreenError::Definition(_))));
    }

    #[test]
    fn display() {
        let location = Location::new("web", "deploy", "10.0.0.1", 2222);
        assert_eq!(location.to_string(), "deploy@10.0.0.1:2222");
    }
}
