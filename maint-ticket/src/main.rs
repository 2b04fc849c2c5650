// File: maint-ticket/src/main.rs
use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use maint_ticket::{run, Cli, ConfigManager, PublishOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the report
    let env_filter = EnvFilter::from_default_env()
        .add_directive("maint_ticket=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_manager = ConfigManager::new(&cli.config).await?;
    let mut config = (*config_manager.get_current_config()).clone();
    config.noop |= cli.noop;

    info!(
        "Starting maintenance ticket run (project {}, noop: {})",
        config.ticket.project_key, config.noop
    );

    let today = Local::now().date_naive();
    let mut stdout = std::io::stdout();
    let outcome = run(&config, today, &mut stdout).await?;

    match outcome {
        PublishOutcome::DryRun => info!("Dry run finished, nothing submitted"),
        PublishOutcome::Confirmed { key, .. } => info!("Ticket {} created", key),
        PublishOutcome::Unconfirmed { key, .. } => info!("Ticket {} created, unconfirmed", key),
    }

    Ok(())
}
