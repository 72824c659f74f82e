//! The `doppel check` command: scan a catalog for duplicates of a new image.

use clap::Args;
use doppel_core::{CatalogProduct, Config, Confidence, DuplicateDetector};
use std::path::PathBuf;

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// URL of the new product image
    pub image_url: String,

    /// Path to a JSON file with the existing catalog
    /// (array of {id, name, image_url} objects)
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Print the verdict as JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// Execute the check command.
pub async fn execute(args: CheckArgs, config: Config) -> anyhow::Result<()> {
    let catalog = read_catalog(&args.catalog)?;
    tracing::info!(
        products = catalog.len(),
        catalog = %args.catalog.display(),
        "Loaded catalog"
    );

    let detector = DuplicateDetector::new(config)?;
    let result = detector.detect_duplicate(&args.image_url, &catalog).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let confidence = match result.confidence {
        Confidence::High => "high",
        Confidence::Medium => "medium",
        Confidence::Low => "low",
    };
    match &result.matched_product {
        Some(product) => {
            println!(
                "Duplicate: {} ({}) at {:.1}% similarity, {confidence} confidence",
                product.name, product.id, result.similarity
            );
        }
        None => {
            println!(
                "No duplicate found (best score {:.1}%, {confidence} confidence)",
                result.similarity
            );
        }
    }

    Ok(())
}

/// Read and parse the catalog JSON file.
fn read_catalog(path: &PathBuf) -> anyhow::Result<Vec<CatalogProduct>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read catalog {}: {e}", path.display()))?;
    let catalog: Vec<CatalogProduct> = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Cannot parse catalog {}: {e}", path.display()))?;
    Ok(catalog)
}
