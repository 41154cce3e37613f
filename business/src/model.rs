//! Directory data model: users, their closed role/status enumerations, partial
//! drafts used for create/update payloads, and the wire envelopes returned by
//! the users API.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed number of users per page.
pub const PAGE_SIZE: u32 = 6;

/// Avatar used when a new user is created without one.
pub const DEFAULT_AVATAR: &str = "https://reqres.in/img/faces/1-image.jpg";

/// Role of a user within the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Administrator,
    #[default]
    #[serde(rename = "user")]
    StandardUser,
    #[serde(rename = "editor")]
    Editor,
}

/// Lifecycle status of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
    Pending,
}

/// Colour family a badge is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Purple,
    Indigo,
    Sky,
    Green,
    Gray,
    Amber,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Administrator, Self::StandardUser, Self::Editor];

    /// Wire identifier, as sent to and received from the users API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "admin",
            Self::StandardUser => "user",
            Self::Editor => "editor",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::StandardUser => "User",
            Self::Editor => "Editor",
        }
    }

    pub fn badge_tone(self) -> BadgeTone {
        match self {
            Self::Administrator => BadgeTone::Purple,
            Self::StandardUser => BadgeTone::Sky,
            Self::Editor => BadgeTone::Indigo,
        }
    }
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Pending];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }

    pub fn badge_tone(self) -> BadgeTone {
        match self {
            Self::Active => BadgeTone::Green,
            Self::Inactive => BadgeTone::Gray,
            Self::Pending => BadgeTone::Amber,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known role or status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`, expected one of: {expected}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "role",
                value: s.to_owned(),
                expected: "admin, user, editor",
            })
    }
}

impl FromStr for Status {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "status",
                value: s.to_owned(),
                expected: "active, inactive, pending",
            })
    }
}

/// A user record as held by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: Status,
    /// The users API may omit this for records it did not create itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Up to two uppercase initials, used as the avatar fallback.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|name| name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Overwrites every field present in `draft`.
    pub fn apply(&mut self, draft: &UserDraft) {
        if let Some(first_name) = &draft.first_name {
            self.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &draft.last_name {
            self.last_name.clone_from(last_name);
        }
        if let Some(email) = &draft.email {
            self.email.clone_from(email);
        }
        if let Some(avatar) = &draft.avatar {
            self.avatar.clone_from(avatar);
        }
        if let Some(role) = draft.role {
            self.role = role;
        }
        if let Some(status) = draft.status {
            self.status = status;
        }
    }
}

/// Partial user: the payload of create and update requests.
///
/// Absent fields are left out of the JSON body entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl UserDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
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

    #[must_use]
    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Fills the enumerable fields a new user must always carry.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.role.get_or_insert_default();
        self.status.get_or_insert_default();
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Materializes a new user from this draft.
    pub fn into_user(self, id: u64, created_at: DateTime<Utc>) -> User {
        User {
            id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            avatar: self.avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_owned()),
            role: self.role.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            created_at: Some(created_at),
            last_login: None,
        }
    }
}

/// Response of `GET /users?page&per_page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub data: Vec<User>,
}

/// Response of `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleResponse {
    pub data: User,
}

/// Identifier handed back on creation; some backends send it as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssignedId {
    Number(u64),
    Text(String),
}

/// Acknowledgment of `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAck {
    #[serde(default)]
    pub id: Option<AssignedId>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Acknowledgment of `PUT /users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAck {
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            first_name: "janet".to_owned(),
            last_name: "weaver".to_owned(),
            email: "janet.weaver@example.com".to_owned(),
            avatar: DEFAULT_AVATAR.to_owned(),
            role: Role::Administrator,
            status: Status::Active,
            created_at: None,
            last_login: None,
        }
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&Role::Administrator).unwrap(),
            "\"admin\""
        );
        assert_eq!(
            serde_json::to_string(&Role::StandardUser).unwrap(),
            "\"user\""
        );
        assert_eq!(serde_json::from_str::<Role>("\"editor\"").unwrap(), Role::Editor);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
        assert!(serde_json::from_str::<Status>("\"banned\"").is_err());
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Administrator);
        assert_eq!(" PENDING ".parse::<Status>().unwrap(), Status::Pending);
    }

    #[test]
    fn test_badge_tones_are_distinct() {
        let roles: Vec<_> = Role::ALL.iter().map(|r| r.badge_tone()).collect();
        let statuses: Vec<_> = Status::ALL.iter().map(|s| s.badge_tone()).collect();
        for tone in &roles {
            assert!(!statuses.contains(tone), "{tone:?} shared by role and status");
        }
    }

    #[test]
    fn test_user_without_role_or_status_deserializes_with_defaults() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 7,
            "first_name": "Michael",
            "last_name": "Lawson",
            "email": "michael.lawson@reqres.in",
            "avatar": "https://reqres.in/img/faces/7-image.jpg"
        }))
        .unwrap();

        assert_eq!(user.role, Role::StandardUser);
        assert_eq!(user.status, Status::Active);
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_draft_serializes_only_present_fields() {
        let draft = UserDraft {
            email: Some("ann@example.com".to_owned()),
            ..UserDraft::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({ "email": "ann@example.com" })
        );
    }

    #[test]
    fn test_with_defaults_keeps_explicit_values() {
        let draft = UserDraft::new("Ann", "Lee", "ann@example.com")
            .status(Status::Pending)
            .with_defaults();
        assert_eq!(draft.role, Some(Role::StandardUser));
        assert_eq!(draft.status, Some(Status::Pending));
    }

    #[test]
    fn test_apply_merges_present_fields() {
        let mut user = sample_user();
        user.apply(&UserDraft {
            last_name: Some("Weaver-Holt".to_owned()),
            status: Some(Status::Inactive),
            ..UserDraft::default()
        });

        assert_eq!(user.first_name, "janet");
        assert_eq!(user.last_name, "Weaver-Holt");
        assert_eq!(user.status, Status::Inactive);
        assert_eq!(user.role, Role::Administrator);
    }

    #[test]
    fn test_initials() {
        assert_eq!(sample_user().initials(), "JW");
    }

    #[test]
    fn test_create_ack_accepts_string_id() {
        let ack: CreateAck = serde_json::from_value(serde_json::json!({
            "id": "512",
            "createdAt": "2024-05-01T10:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(ack.id, Some(AssignedId::Text("512".to_owned())));
        assert!(ack.created_at.is_some());
    }
}
