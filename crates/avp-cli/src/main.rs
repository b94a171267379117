#![allow(dead_code)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use clap::Parser;

mod cli;
mod commands;
mod context;
mod controller;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("avp error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    // Marketing content needs neither config nor a session.
    if matches!(cli.command, cli::Commands::Info) {
        return commands::info::handle(&flags);
    }

    let config = avp_config::PortalConfig::load_with_dotenv()?;

    // Auth commands manage the session themselves and run before the
    // session-aware context exists.
    if let cli::Commands::Auth { action } = &cli.command {
        return commands::auth::handle(action, &flags, &config).await;
    }

    let ctx = context::AppContext::init(config);
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AVP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
