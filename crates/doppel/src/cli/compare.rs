//! The `doppel compare` command: diagnostic pairwise comparison.
//!
//! Scores two explicit image URLs and prints the intermediate hash and color
//! similarities alongside the combined score. Intended for threshold tuning.

use clap::Args;
use doppel_core::{Config, DuplicateDetector};

/// Arguments for the `compare` command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// URL of the first (query) image
    pub left: String,

    /// URL of the second (candidate) image
    pub right: String,

    /// Print the report as JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// Execute the compare command.
pub async fn execute(args: CompareArgs, config: Config) -> anyhow::Result<()> {
    let detector = DuplicateDetector::new(config)?;
    let report = detector.compare_pair(&args.left, &args.right).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Hash similarity:  {:>5.1}%", report.hash_similarity);
        println!("Color similarity: {:>5.1}%", report.color_similarity);
        println!("Combined:         {:>5.1}%", report.combined);
    }

    Ok(())
}
