use anyhow::Result;
use roster_business::{Role, Status, UserFilter, UserGateway};
use tracing::instrument;

use super::load_page;
use crate::context::Session;
use crate::table::{page_footer, users_table};

#[instrument(skip_all, name = "list", fields(page))]
pub async fn run_list<G: UserGateway>(
    session: &Session<G>,
    page: u32,
    query: Option<String>,
    role: Option<Role>,
    status: Option<Status>,
) -> Result<()> {
    load_page(session, page).await?;

    let mut filter = UserFilter::new().query(query.unwrap_or_default());
    filter.role = role;
    filter.status = status;

    let state = session.store.snapshot();
    let out = &session.out;
    let matched = filter.apply(state.users());

    if state.users().is_empty() {
        out.dim("No users found.");
    } else if matched.is_empty() {
        out.dim("No users on this page match the filter.");
    } else {
        out.newline();
        out.print(users_table(matched.iter().copied()));
    }

    out.dim(page_footer(state.page()));
    if !filter.is_empty() {
        out.dim(format!(
            "Showing {} of {} on this page",
            matched.len(),
            state.users().len()
        ));
    }
    Ok(())
}
