use anyhow::Result;
use roster_business::{DirectorySummary, UserGateway};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::instrument;

use super::load_page;
use crate::context::Session;

#[instrument(skip_all, name = "stats", fields(page))]
pub async fn run_stats<G: UserGateway>(session: &Session<G>, page: u32) -> Result<()> {
    load_page(session, page).await?;

    let state = session.store.snapshot();
    let summary = DirectorySummary::from_state(&state);
    let out = &session.out;

    out.header(format!("{} user(s) in the directory", summary.total));
    out.dim(format!(
        "Breakdown of page {} ({} loaded)",
        state.current_page(),
        summary.loaded
    ));

    let mut builder = Builder::default();
    builder.push_record(["Role", "Users"]);
    for (role, count) in summary.roles() {
        builder.push_record([role.label().to_owned(), count.to_string()]);
    }
    let mut roles = builder.build();
    roles.with(Style::rounded());

    let mut builder = Builder::default();
    builder.push_record(["Status", "Users"]);
    for (status, count) in summary.statuses() {
        builder.push_record([status.label().to_owned(), count.to_string()]);
    }
    let mut statuses = builder.build();
    statuses.with(Style::rounded());

    out.newline();
    out.print(roles);
    out.print(statuses);
    Ok(())
}
