//! Doppel CLI - Near-duplicate product image detection.
//!
//! Doppel checks a candidate product image against an existing catalog and
//! reports whether it is likely a duplicate, with intermediate scores
//! available for tuning.
//!
//! # Usage
//!
//! ```bash
//! # Check a new image against a catalog export
//! doppel check https://cdn.example.com/new.jpg --catalog catalog.json
//!
//! # Score two explicit images against each other
//! doppel compare https://cdn.example.com/a.jpg https://cdn.example.com/b.jpg
//!
//! # View configuration
//! doppel config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Doppel - Near-duplicate product image detection for catalog administration.
#[derive(Parser, Debug)]
#[command(name = "doppel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a new image against every product in a catalog file
    Check(cli::check::CheckArgs),

    /// Score two explicit image URLs against each other
    Compare(cli::compare::CompareArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match doppel_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `doppel config path`."
            );
            doppel_core::Config::default()
        }
    };
    logging::init(&config.logging, cli.verbose, cli.json_logs);

    tracing::debug!("Doppel v{}", doppel_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Check(args) => cli::check::execute(args, config).await,
        Commands::Compare(args) => cli::compare::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
