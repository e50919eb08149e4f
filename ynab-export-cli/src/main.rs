// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! ynab-export CLI - YNAB budget summaries and JSON exports.
//!
//! # Examples
//!
//! ```bash
//! # Print a budget summary to the console
//! ynab-export
//!
//! # Same, explicitly
//! ynab-export summary
//!
//! # Write a timestamped JSON export to ./output
//! ynab-export export
//!
//! # Write to a different directory
//! ynab-export export --output-dir /tmp/ynab
//! ```
//!
//! Configuration comes from the environment: `YNAB_ACCESS_TOKEN` (required),
//! `YNAB_BUDGET_ID` (optional, auto-selects the first budget when unset),
//! `YNAB_CURRENCY` (optional, defaults to USD).

mod commands;
mod exporter;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ynab_export_client::{ClientError, Config};

// ============================================================================
// CLI Definition
// ============================================================================

/// ynab-export CLI - budget summaries and JSON exports.
#[derive(Parser)]
#[command(name = "ynab-export")]
#[command(about = "Fetch YNAB budget data and print or export it")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'summary' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print a budget summary to the console (default).
    #[command(visible_alias = "s")]
    Summary,

    /// Write a timestamped JSON export file.
    #[command(visible_alias = "e")]
    Export(commands::export::ExportArgs),
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("ynab_export_cli=debug,ynab_export_client=debug,ynab_export_core=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli).await {
        if !cli.quiet {
            eprintln!("Error: {e}");
            print_remediation(&e);
        }
    }

    // Failures are reported above; the process still ends normally so
    // wrapper scripts keep running.
    Ok(())
}

async fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env()?;

    match &cli.command {
        Some(Commands::Export(args)) => commands::export::run(args, &config, cli).await,
        Some(Commands::Summary) | None => commands::summary::run(&config, cli).await,
    }
}

fn print_remediation(error: &anyhow::Error) {
    if let Some(ClientError::MissingCredential(_)) = error.downcast_ref::<ClientError>() {
        eprintln!();
        eprintln!("Make sure to:");
        eprintln!("  1. Set YNAB_ACCESS_TOKEN in your environment");
        eprintln!("  2. Optionally set YNAB_BUDGET_ID for a specific budget");
        eprintln!("  3. Get your access token from: https://app.ynab.com/settings/developer");
    }
}
