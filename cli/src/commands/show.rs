use anyhow::{Result, bail};
use roster_business::UserGateway;
use tracing::instrument;

use crate::context::Session;

#[instrument(skip_all, name = "show", fields(id))]
pub async fn run_show<G: UserGateway>(session: &Session<G>, id: u64) -> Result<()> {
    let Some(user) = session.store.fetch_one(id).await else {
        bail!("User {id} is not available");
    };

    let out = &session.out;
    out.header(format!("{} ({})", user.full_name(), user.initials()));
    out.labeled_indent("ID", user.id, 2);
    out.labeled_indent("Email", &user.email, 2);
    out.badge("Role", user.role.label(), user.role.badge_tone());
    out.badge("Status", user.status.label(), user.status.badge_tone());
    out.labeled_indent("Avatar", &user.avatar, 2);
    if let Some(joined) = user.created_at {
        out.labeled_indent("Joined", joined.format("%Y-%m-%d %H:%M UTC"), 2);
    }
    if let Some(seen) = user.last_login {
        out.labeled_indent("Last login", seen.format("%Y-%m-%d %H:%M UTC"), 2);
    }
    Ok(())
}
