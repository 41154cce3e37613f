//! Subcommand implementations, one module each.

pub mod completions;
pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod stats;
pub mod update;

pub use completions::generate_completions;
pub use create::run_create;
pub use delete::run_delete;
pub use list::run_list;
pub use show::run_show;
pub use stats::run_stats;
pub use update::run_update;

use anyhow::{Result, bail};
use roster_business::UserGateway;

use crate::context::Session;

/// Loads `page` and fails with the directory's error when that did not work.
pub(crate) async fn load_page<G: UserGateway>(session: &Session<G>, page: u32) -> Result<()> {
    if session.store.fetch_page(page).await {
        return Ok(());
    }
    let state = session.store.snapshot();
    bail!(
        "Could not load page {page}: {}",
        state.error().unwrap_or("request superseded")
    )
}
