//! Tabular rendering of users.

use roster_business::{PageMeta, User};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
pub struct UserRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Joined")]
    joined: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: truncate_str(&user.full_name(), 24),
            email: truncate_str(&user.email, 32),
            role: user.role.label(),
            status: user.status.label(),
            joined: user
                .created_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_owned()),
        }
    }
}

pub fn users_table<'a>(users: impl IntoIterator<Item = &'a User>) -> String {
    let rows: Vec<UserRow> = users.into_iter().map(UserRow::from).collect();
    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}

/// `Page 2 of 3 · 14 users`
pub fn page_footer(page: PageMeta) -> String {
    format!(
        "Page {} of {} · {} user(s)",
        page.current,
        page.last_page(),
        page.total
    )
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    } else {
        s.to_owned()
    }
}
