//! Walklint CLI
//!
//! Validates walkthrough tutorial repositories: markdown documents are
//! checked against the walkthrough model, metadata files against the
//! embedded JSON schema.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod lint;
mod metadata;

/// Walklint - walkthrough tutorial linter
#[derive(Parser)]
#[command(name = "walklint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a directory of walkthroughs
    Lint {
        /// Root directory containing one subdirectory per walkthrough
        directory: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Treat warnings as failures
        #[arg(long)]
        pedantic: bool,
    },

    /// Build the walkthrough model for a single document and print it as JSON
    Model {
        /// Path to a walkthrough markdown file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Lint {
            directory,
            format,
            pedantic,
        } => lint::run(directory, *pedantic, format),
        Commands::Model { file } => run_model(file).map(|_| false),
    }
}

fn run_model(file: &Path) -> Result<()> {
    let source = std::fs::read_to_string(file).into_diagnostic()?;
    let walkthrough = walklint_core::build(&source).into_diagnostic()?;
    println!(
        "{}",
        serde_json::to_string_pretty(&walkthrough).into_diagnostic()?
    );
    Ok(())
}
