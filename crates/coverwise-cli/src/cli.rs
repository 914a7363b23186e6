//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Coverwise - Check dwelling coverage against today's rebuild costs
#[derive(Parser)]
#[command(name = "coverwise")]
#[command(about = "Dwelling coverage estimator driven by construction cost indices", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Estimator config file (defaults to the data dir override, then built-in values)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a policy's coverage and draft the outreach message
    Analyze {
        /// Manual-entry file (TOML or JSON); the sample policy is used if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Declarations page to upload (not parsed; sample values are used)
        #[arg(short, long, conflicts_with = "input")]
        declarations: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Print the message without markup
        #[arg(long)]
        plain: bool,
    },

    /// Show the step-by-step rebuild cost for a home
    Estimate {
        /// Manual-entry file (TOML or JSON); the sample home is used if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Year to price the rebuild in
        #[arg(short, long)]
        year: i32,

        /// Baseline year for escalation (defaults to the policy start year)
        #[arg(short, long)]
        baseline: Option<i32>,
    },

    /// Show the construction cost indices
    Indices {
        /// First year of the combined series (defaults to the first indexed year)
        #[arg(long)]
        from: Option<i32>,
    },

    /// Export index data as CSV
    Export {
        /// First year of the exported series (or the baseline of the breakdown)
        #[arg(long)]
        from: Option<i32>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export the per-category breakdown instead of the combined series
        #[arg(long)]
        breakdown: bool,
    },

    /// Print a sample manual-entry file
    Sample {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved estimator configuration
    Config,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}
