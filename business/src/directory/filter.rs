//! Narrowing the loaded page by free text, role and status.
//!
//! This only ever looks at the users already loaded; it is not a search.

use crate::model::{Role, Status, User};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Matched as typed, case-insensitively, against first name, last name
    /// and email. Only an empty query matches everyone.
    pub query: String,
    pub role: Option<Role>,
    pub status: Option<Status>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.role.is_none() && self.status.is_none()
    }

    pub fn matches(&self, user: &User) -> bool {
        let needle = self.query.to_lowercase();
        let text_matches = needle.is_empty()
            || [&user.first_name, &user.last_name, &user.email]
                .into_iter()
                .any(|field| field.to_lowercase().contains(&needle));

        text_matches
            && self.role.is_none_or(|role| role == user.role)
            && self.status.is_none_or(|status| status == user.status)
    }

    /// The matching users, in page order.
    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|user| self.matches(user)).collect()
    }
}
