//! Read-only mode CLI
//!
//! Operator tool for checking what read-only mode does to a set of forms:
//! - Print the verdict for given form ids
//! - Show the built allow and view-only lists
//! - Show the effective settings

use clap::{Parser, Subcommand};
use readonly_mode::{ReadOnlyGate, ReadOnlySettings};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use error::CliResult;

/// Read-only mode CLI application
#[derive(Parser)]
#[command(name = "readonly")]
#[command(about = "Inspect read-only mode form verdicts", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file path
    #[arg(short, long, env = "READONLY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the read-only flag from the settings
    #[arg(long)]
    read_only: Option<bool>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = output::OutputFormat::Text)]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Print the verdict for each form id
    Check {
        /// Form ids to check
        #[arg(required = true)]
        forms: Vec<String>,
    },

    /// Show the built allow and view-only lists
    Lists,

    /// Show the effective settings
    Config,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Load settings
    let mut settings = ReadOnlySettings::load(cli.config.as_deref())?;
    if let Some(read_only) = cli.read_only {
        settings.enabled = read_only;
    }

    let gate = ReadOnlyGate::new(settings).with_emit_audit_events(cli.verbose);
    tracing::debug!(read_only = gate.is_read_only(), "Loaded read-only settings");

    match cli.command {
        Commands::Check { forms } => commands::check(&gate, &forms, cli.output),
        Commands::Lists => commands::lists(&gate, cli.output),
        Commands::Config => commands::config(&gate, cli.output),
    }
}
