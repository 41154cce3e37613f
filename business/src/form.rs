//! Create/edit form input and its structural checks.
//!
//! Validation happens here, before anything reaches the store. The store and
//! gateways never validate user input themselves.

use crate::model::{Role, Status, User, UserDraft};

const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("First name must be at least 2 characters")]
    FirstNameTooShort,
    #[error("Last name must be at least 2 characters")]
    LastNameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Raw form fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
    pub role: Role,
    pub status: Status,
}

impl UserForm {
    /// Pre-fills the form for editing an existing user.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            role: user.role,
            status: user.status,
        }
    }

    /// Every problem with the form, in field order.
    pub fn errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.first_name.trim().chars().count() < MIN_NAME_CHARS {
            errors.push(ValidationError::FirstNameTooShort);
        }
        if self.last_name.trim().chars().count() < MIN_NAME_CHARS {
            errors.push(ValidationError::LastNameTooShort);
        }
        if !is_valid_email(self.email.trim()) {
            errors.push(ValidationError::InvalidEmail);
        }
        errors
    }

    /// Checks the form and turns it into a draft. Reports the first problem.
    pub fn validate(&self) -> Result<UserDraft, ValidationError> {
        if let Some(err) = self.errors().into_iter().next() {
            return Err(err);
        }

        let avatar = self.avatar.trim();
        Ok(UserDraft {
            first_name: Some(self.first_name.trim().to_owned()),
            last_name: Some(self.last_name.trim().to_owned()),
            email: Some(self.email.trim().to_owned()),
            avatar: (!avatar.is_empty()).then(|| avatar.to_owned()),
            role: Some(self.role),
            status: Some(self.status),
        })
    }
}

/// `local@domain.tld`: one `@`, no whitespace, a dot inside the domain with
/// non-empty labels around it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> UserForm {
        UserForm {
            first_name: "Ann".to_owned(),
            last_name: "Lee".to_owned(),
            email: "ann@example.com".to_owned(),
            ..UserForm::default()
        }
    }

    #[test]
    fn test_valid_form_becomes_draft() {
        let draft = valid_form().validate().unwrap();
        assert_eq!(draft.first_name.as_deref(), Some("Ann"));
        assert_eq!(draft.role, Some(Role::StandardUser));
        assert_eq!(draft.status, Some(Status::Active));
        assert_eq!(draft.avatar, None);
    }

    #[test]
    fn test_short_names_are_rejected() {
        let form = UserForm {
            first_name: " A ".to_owned(),
            last_name: "L".to_owned(),
            ..valid_form()
        };
        assert_eq!(
            form.errors(),
            vec![
                ValidationError::FirstNameTooShort,
                ValidationError::LastNameTooShort
            ]
        );
        assert_eq!(form.validate(), Err(ValidationError::FirstNameTooShort));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("ann.lee+tag@mail.example.co"));
        assert!(!is_valid_email("ann"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ann@example"));
        assert!(!is_valid_email("ann@example."));
        assert!(!is_valid_email("ann@@example.com"));
        assert!(!is_valid_email("ann lee@example.com"));
    }

    #[test]
    fn test_from_user_round_trips_through_validate() {
        let user = crate::gateway::seed::demo_users().remove(2);
        let draft = UserForm::from_user(&user).validate().unwrap();
        assert_eq!(draft.email.as_deref(), Some(user.email.as_str()));
        assert_eq!(draft.role, Some(user.role));
        assert_eq!(draft.avatar.as_deref(), Some(user.avatar.as_str()));
    }
}
