//! Operator console for the pizza service admin dashboard
//!
//! Reads one command per line from stdin and prints the active tab after each.
//! Logs go to stderr so the rendered screen on stdout stays clean.

mod command;
mod config;
mod view;

use std::io::Write as _;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use command::Command;
use config::CliConfig;
use pizza_admin_client::HttpAdminApi;
use pizza_admin_core::services::{AdminDashboard, ServiceContext};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> ExitCode {
    let config = match CliConfig::load_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pizza-admin: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_filter.as_deref());

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(configured: Option<&str>) {
    // RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(DEFAULT_LOG_FILTER)));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

async fn run(config: CliConfig) -> Result<()> {
    tracing::info!("Connecting to {}", config.client.base_url);
    let api = HttpAdminApi::new(config.client).context("build admin API client")?;
    let ctx = ServiceContext::new(Arc::new(api));

    let mut dashboard = match ctx.open_dashboard().await {
        Ok(dashboard) => dashboard,
        Err(e) if e.is_unauthorized() => {
            println!("Access denied. Sign in as an admin to use this console.");
            return Err(e).context("admin role required");
        }
        Err(e) => return Err(e).context("resolve signed-in user"),
    };
    tracing::info!("Signed in as {}", dashboard.capability().viewer_name());

    if let Err(e) = dashboard.mount().await {
        tracing::warn!("Initial load failed: {e}");
    }
    show(&dashboard)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("read command")? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", command::HELP);
                continue;
            }
            _ => {}
        }

        if let Err(e) = step(&mut dashboard, command).await {
            println!("{e}");
            continue;
        }
        show(&dashboard)?;

        if dashboard.is_access_denied() {
            anyhow::bail!("admin session is no longer authorized");
        }
    }

    tracing::info!("Bye");
    Ok(())
}

/// Resolve `command` against the rows on screen and dispatch it.
///
/// Dispatch failures are not returned: the dashboard already holds them as a
/// notice that the next render shows.
async fn step(dashboard: &mut AdminDashboard, command: Command) -> Result<()> {
    let action = command.into_action(
        dashboard.active_tab(),
        &dashboard.franchises().result().items,
        &dashboard.users().result().items,
    )?;
    if let Some(action) = action {
        if let Err(e) = dashboard.dispatch(action).await {
            tracing::debug!("Action failed: {e}");
        }
    }
    Ok(())
}

fn show(dashboard: &AdminDashboard) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", view::render(dashboard))?;
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}
