use anyhow::{Result, bail};
use roster_business::UserGateway;
use tracing::instrument;

use super::load_page;
use crate::context::Session;
use crate::table::{page_footer, users_table};

/// Deletes a user while `page` is loaded, then shows that page as refreshed.
#[instrument(skip_all, name = "delete", fields(id, page))]
pub async fn run_delete<G: UserGateway>(session: &Session<G>, id: u64, page: u32) -> Result<()> {
    load_page(session, page).await?;

    if !session.store.delete(id).await {
        bail!("User {id} was not deleted");
    }

    let state = session.store.snapshot();
    let out = &session.out;
    if !state.users().is_empty() {
        out.newline();
        out.print(users_table(state.users()));
    }
    out.dim(page_footer(state.page()));
    Ok(())
}
