//! Demo directory used by the in-memory gateway.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{Role, Status, User};

const DEMO: [(&str, &str, Role, Status, &str); 12] = [
    ("Janet", "Weaver", Role::Administrator, Status::Active, "2022-01-05"),
    ("Emma", "Wong", Role::StandardUser, Status::Active, "2022-02-10"),
    ("Eve", "Holt", Role::Editor, Status::Inactive, "2022-03-15"),
    ("Charles", "Morris", Role::StandardUser, Status::Active, "2022-04-20"),
    ("Tracey", "Ramos", Role::Editor, Status::Pending, "2022-05-25"),
    ("Michael", "Lawson", Role::StandardUser, Status::Active, "2022-06-30"),
    ("Lindsay", "Ferguson", Role::StandardUser, Status::Inactive, "2022-07-05"),
    ("Tobias", "Funke", Role::Editor, Status::Active, "2022-08-10"),
    ("Byron", "Fields", Role::Administrator, Status::Active, "2022-09-15"),
    ("George", "Edwards", Role::StandardUser, Status::Pending, "2022-10-20"),
    ("Rachel", "Howell", Role::StandardUser, Status::Active, "2022-11-25"),
    ("Alex", "Garcia", Role::Editor, Status::Active, "2022-12-30"),
];

fn joined_on(date: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(9, 0, 0))
        .map(|at| at.and_utc())
}

/// Twelve users with ids `1..=12`.
pub fn demo_users() -> Vec<User> {
    DEMO.iter()
        .zip(1u64..)
        .map(|(&(first, last, role, status, joined), id)| User {
            id,
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            // Face images on reqres are numbered from 1 to 12.
            avatar: format!("https://reqres.in/img/faces/{}-image.jpg", id % 12 + 1),
            role,
            status,
            created_at: joined_on(joined),
            last_login: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_users_have_unique_sequential_ids() {
        let users = demo_users();
        let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
        assert!(users.iter().all(|u| u.created_at.is_some()));
    }

    #[test]
    fn test_demo_emails() {
        let users = demo_users();
        assert_eq!(users[0].email, "janet.weaver@example.com");
        assert_eq!(users[0].avatar, "https://reqres.in/img/faces/2-image.jpg");
    }
}
