//! Coverwise CLI - Dwelling coverage estimator
//!
//! Usage:
//!   coverwise analyze --input home.toml   Analyze a policy and draft the message
//!   coverwise estimate --year 2025        Step-by-step rebuild cost
//!   coverwise indices --from 2019         Cost index tables
//!   coverwise serve --port 3000           Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            input,
            declarations,
            json,
            plain,
        } => commands::cmd_analyze(
            &config,
            input.as_deref(),
            declarations.as_deref(),
            json,
            plain,
        ),
        Commands::Estimate {
            input,
            year,
            baseline,
        } => commands::cmd_estimate(&config, input.as_deref(), year, baseline),
        Commands::Indices { from } => commands::cmd_indices(from),
        Commands::Export {
            from,
            output,
            breakdown,
        } => commands::cmd_export(from, output.as_deref(), breakdown),
        Commands::Sample { json } => commands::cmd_sample(json),
        Commands::Config => commands::cmd_config(&config, cli.config.as_deref()),
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(config, &host, port, static_dir.as_deref()).await,
    }
}
