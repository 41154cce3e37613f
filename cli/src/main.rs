//! `roster`: browse and manage the user directory from the terminal.
//!
//! `--mock` runs against the built-in demo directory; otherwise requests go to
//! the users API named by `--api-url` or `ROSTER_API_URL`.

#![allow(clippy::exit)]

mod cli;
mod commands;
mod config;
mod context;
mod output;
mod table;
mod timing;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use roster_business::{ChannelNotifier, HttpGateway, InMemoryGateway, UserGateway};

use crate::cli::{Cli, Commands};
use crate::commands::{
    generate_completions, run_create, run_delete, run_list, run_show, run_stats, run_update,
};
use crate::config::{load_dotenv, resolve_config};
use crate::context::Session;

#[tokio::main]
async fn main() {
    load_dotenv();
    let cli = Cli::parse();
    timing::init_tracing(cli.verbose, cli.timing);

    if let Err(err) = run(cli).await {
        output::Output::new().error(format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let (notifier, toasts) = ChannelNotifier::channel();
    if cli.mock {
        tracing::debug!("using the in-memory demo directory");
        let gateway = InMemoryGateway::seeded(notifier.clone());
        dispatch(Session::new(gateway, notifier, toasts), cli.command).await
    } else {
        let config = resolve_config(cli.api_url.as_deref())?;
        tracing::debug!("using the users API at {}", config.api_url());
        let gateway =
            HttpGateway::new(&config, notifier.clone()).context("Failed to build HTTP client")?;
        dispatch(Session::new(gateway, notifier, toasts), cli.command).await
    }
}

async fn dispatch<G: UserGateway>(session: Session<G>, command: Commands) -> Result<()> {
    let result = match command {
        Commands::List {
            page,
            query,
            role,
            status,
        } => run_list(&session, page, query, role, status).await,
        Commands::Show { id } => run_show(&session, id).await,
        Commands::Create { fields } => run_create(&session, fields).await,
        Commands::Update { id, fields } => run_update(&session, id, fields).await,
        Commands::Delete { id, page } => run_delete(&session, id, page).await,
        Commands::Stats { page } => run_stats(&session, page).await,
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    };
    session.flush_toasts();
    result
}
