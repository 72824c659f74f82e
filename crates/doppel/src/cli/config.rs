//! The `doppel config` command for inspecting and creating configuration.

use clap::{Args, Subcommand};
use doppel_core::Config;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Summarize the effective comparison tunables
    Show {
        /// Dump the full configuration as TOML instead of the summary
        #[arg(long)]
        toml: bool,
    },

    /// Show the config file path and whether it exists
    Path,

    /// Write a config file populated with the documented defaults
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { toml } => {
            // `load` validates any file it finds, so an invalid config file
            // surfaces here rather than mid-scan.
            let config = Config::load()?;
            if toml {
                print!("{}", config.to_toml()?);
            } else {
                print!("{}", summary(&config));
            }
        }

        ConfigCommand::Path => {
            let path = Config::default_path();
            let state = if path.exists() {
                "exists"
            } else {
                "not created yet, defaults in effect"
            };
            println!("{} ({state})", path.display());
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, Config::default().to_toml()?)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}

/// Human-oriented view of the knobs that decide a verdict.
fn summary(config: &Config) -> String {
    let mut out = String::new();

    let side = config.hash.grid_side;
    out.push_str(&format!(
        "Hash:       {side}x{side} grid ({} bits), load timeout {}ms\n",
        side * side,
        config.loader.hash_timeout_ms
    ));
    out.push_str(&format!(
        "Palette:    top {count} colors on a {side}x{side} grid, quantize step {step}, load timeout {timeout}ms\n",
        count = config.palette.max_colors,
        side = config.palette.grid_side,
        step = config.palette.quantize_step,
        timeout = config.loader.color_timeout_ms
    ));
    out.push_str(&format!(
        "Weights:    hash {:.2} / color {:.2}\n",
        config.scoring.hash_weight, config.scoring.color_weight
    ));
    out.push_str(&format!(
        "Verdict:    match >= {:.1}%, medium confidence >= {:.1}%, high >= {:.1}%\n",
        config.thresholds.match_threshold,
        config.thresholds.medium_confidence,
        config.thresholds.high_confidence
    ));
    out.push_str(&format!(
        "Cache bust: {}\n",
        if config.loader.cache_bust { "on" } else { "off" }
    ));

    out
}
