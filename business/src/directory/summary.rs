//! Dashboard figures derived from the directory state.

use super::state::DirectoryState;
use crate::model::{Role, Status, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySummary {
    /// Users in the whole directory, as last reported by the gateway.
    pub total: u64,
    /// Users on the loaded page; the breakdowns below cover only these.
    pub loaded: usize,
    roles: Vec<(Role, usize)>,
    statuses: Vec<(Status, usize)>,
}

impl DirectorySummary {
    pub fn from_users(total: u64, users: &[User]) -> Self {
        let roles = Role::ALL
            .into_iter()
            .map(|role| (role, users.iter().filter(|u| u.role == role).count()))
            .collect();
        let statuses = Status::ALL
            .into_iter()
            .map(|status| (status, users.iter().filter(|u| u.status == status).count()))
            .collect();

        Self {
            total,
            loaded: users.len(),
            roles,
            statuses,
        }
    }

    pub fn from_state(state: &DirectoryState) -> Self {
        Self::from_users(state.total(), state.users())
    }

    pub fn role_count(&self, role: Role) -> usize {
        self.roles
            .iter()
            .find(|(r, _)| *r == role)
            .map_or(0, |(_, count)| *count)
    }

    pub fn status_count(&self, status: Status) -> usize {
        self.statuses
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, count)| *count)
    }

    pub fn roles(&self) -> &[(Role, usize)] {
        &self.roles
    }

    pub fn statuses(&self) -> &[(Status, usize)] {
        &self.statuses
    }
}
