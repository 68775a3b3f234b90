//! First-run admin password setup.

use jumper_form::{DefinitionError, FieldDescriptor, FormBackend, FormDefinition, FormOutcome};
use tracing::debug;

use crate::{ScreenError, show};

/// Name of the masked password input.
pub const ADMIN_PASSWORD: &str = "Set an admin password";

const CONTINUE: &str = " Continue ";
const BACK: &str = " Back ";

/// The setup form, optionally prefilled with a password entered earlier.
///
/// The form cannot be cancelled; the operator leaves it with Back.
pub fn admin_password_form(initial: Option<&str>) -> Result<FormDefinition, DefinitionError> {
    Ok(FormDefinition::new(vec![
        FieldDescriptor::text(ADMIN_PASSWORD)
            .masked()
            .with_value(initial.unwrap_or_default()),
        FieldDescriptor::selection(CONTINUE).gate(),
        FieldDescriptor::selection(BACK),
    ])?
    .with_title("Setup")
    .with_header("Jump Server Setup")
    .with_footer("Use the arrows keys to navigate"))
}

/// Ask for the admin password.
///
/// Returns the password on Continue and `None` on Back.
pub fn set_admin_password<B: FormBackend>(
    backend: &B,
    initial: Option<&str>,
) -> Result<Option<String>, ScreenError> {
    let outcome = show(backend, admin_password_form(initial)?)?;
    let FormOutcome::Confirmed(submission) = outcome else {
        return Ok(None);
    };
    if !submission.is_action(CONTINUE) {
        debug!("admin password setup backed out");
        return Ok(None);
    }

    let password = submission.value(ADMIN_PASSWORD).unwrap_or_default();
    debug!(len = password.chars().count(), "admin password entered");
    Ok(Some(password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_shape() {
        let form = admin_password_form(Some("hunter2")).unwrap();
        assert_eq!(form.len(), 3);
        assert!(!form.is_cancellable());
        assert!(form.field(ADMIN_PASSWORD).unwrap().is_masked());
        assert_eq!(form.field(ADMIN_PASSWORD).unwrap().value(), "hunter2");
        assert!(form.field(CONTINUE).unwrap().is_gate());
        assert_eq!(form.title.as_deref(), Some("Setup"));
    }
}
