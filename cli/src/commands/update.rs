use anyhow::{Result, bail};
use roster_business::{UserForm, UserGateway};
use tracing::instrument;

use super::create::{check_form, overlay};
use crate::cli::UserFields;
use crate::context::Session;

/// Loads the user, applies the given fields, validates the whole record and
/// sends it back.
#[instrument(skip_all, name = "update", fields(id))]
pub async fn run_update<G: UserGateway>(
    session: &Session<G>,
    id: u64,
    fields: UserFields,
) -> Result<()> {
    if fields.is_empty() {
        bail!("Nothing to update: pass at least one field");
    }
    let Some(current) = session.store.fetch_one(id).await else {
        bail!("User {id} is not available");
    };

    let form = overlay(UserForm::from_user(&current), fields);
    check_form(&session.out, &form)?;
    let draft = form.validate()?;

    if !session.store.update(id, &draft).await {
        bail!("User {id} was not updated");
    }
    Ok(())
}
