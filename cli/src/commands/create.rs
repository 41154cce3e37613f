use anyhow::{Result, bail};
use roster_business::{UserForm, UserGateway};
use tracing::instrument;

use crate::cli::UserFields;
use crate::context::Session;
use crate::output::Output;

/// Fills a blank form from the flags.
pub(crate) fn form_from_fields(fields: UserFields) -> UserForm {
    overlay(UserForm::default(), fields)
}

/// Replaces the form fields that were given on the command line.
pub(crate) fn overlay(mut form: UserForm, fields: UserFields) -> UserForm {
    if let Some(first_name) = fields.first_name {
        form.first_name = first_name;
    }
    if let Some(last_name) = fields.last_name {
        form.last_name = last_name;
    }
    if let Some(email) = fields.email {
        form.email = email;
    }
    if let Some(avatar) = fields.avatar {
        form.avatar = avatar;
    }
    if let Some(role) = fields.role {
        form.role = role;
    }
    if let Some(status) = fields.status {
        form.status = status;
    }
    form
}

/// Prints every validation problem and fails if there was any.
pub(crate) fn check_form(out: &Output, form: &UserForm) -> Result<()> {
    let errors = form.errors();
    if errors.is_empty() {
        return Ok(());
    }
    for err in &errors {
        out.error(err);
    }
    bail!("{} invalid field(s)", errors.len())
}

#[instrument(skip_all, name = "create")]
pub async fn run_create<G: UserGateway>(session: &Session<G>, fields: UserFields) -> Result<()> {
    let form = form_from_fields(fields);
    check_form(&session.out, &form)?;
    let draft = form.validate()?;

    if !session.store.create(draft).await {
        bail!("User was not created");
    }
    let state = session.store.snapshot();
    session
        .out
        .dim(format!("Directory now holds {} user(s)", state.total()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use roster_business::{Role, Status, ValidationError};

    use super::*;

    #[test]
    fn test_missing_fields_fail_validation() {
        let form = form_from_fields(UserFields {
            first_name: Some("Ann".to_owned()),
            ..UserFields::default()
        });
        assert_eq!(
            form.errors(),
            vec![
                ValidationError::LastNameTooShort,
                ValidationError::InvalidEmail
            ]
        );
    }

    #[test]
    fn test_overlay_keeps_untouched_fields() {
        let base = UserForm {
            first_name: "Eve".to_owned(),
            last_name: "Holt".to_owned(),
            email: "eve.holt@example.com".to_owned(),
            role: Role::Editor,
            ..UserForm::default()
        };
        let form = overlay(
            base,
            UserFields {
                status: Some(Status::Inactive),
                ..UserFields::default()
            },
        );
        assert_eq!(form.first_name, "Eve");
        assert_eq!(form.role, Role::Editor);
        assert_eq!(form.status, Status::Inactive);
    }
}
