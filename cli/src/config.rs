//! Resolves the business configuration for one invocation.
//!
//! Precedence: `--api-url` (or `ROSTER_API_URL`), then the `ROSTER_*`
//! environment, then built-in defaults. A `.env` file in the working
//! directory is loaded into the environment first.

use anyhow::{Context as _, Result};
use roster_business::BusinessConfig;

pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => log::warn!("ignoring .env: {err}"),
    }
}

pub fn resolve_config(api_url: Option<&str>) -> Result<BusinessConfig> {
    let config = BusinessConfig::from_env().context("Invalid ROSTER_* environment")?;
    Ok(apply_override(config, api_url))
}

fn apply_override(mut config: BusinessConfig, api_url: Option<&str>) -> BusinessConfig {
    if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
        url.clone_into(&mut config.api_base_url);
    }
    config
}
