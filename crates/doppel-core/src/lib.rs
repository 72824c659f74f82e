//! Doppel Core - Near-duplicate product image detection.
//!
//! Doppel checks a newly uploaded product image against an existing catalog
//! and reports whether it is likely a duplicate, with a confidence tier.
//!
//! # Architecture
//!
//! The comparison pipeline per candidate pair:
//!
//! ```text
//! URL → Fetch → Decode → Perceptual hash ┐
//!                      → Color palette   ├→ Weighted score → Best match → Verdict
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use doppel_core::{CatalogProduct, Config, DuplicateDetector};
//!
//! #[tokio::main]
//! async fn main() -> doppel_core::Result<()> {
//!     let config = Config::load()?;
//!     let detector = DuplicateDetector::new(config)?;
//!
//!     let catalog: Vec<CatalogProduct> = load_catalog();
//!     let verdict = detector.detect_duplicate(&new_image_url, &catalog).await;
//!     if verdict.is_match {
//!         println!("Looks like {:?}", verdict.matched_product);
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod compare;
pub mod config;
pub mod error;
pub mod types;

// Re-exports for convenient access
pub use compare::{DuplicateDetector, HttpFetcher, ImageFetcher};
pub use config::Config;
pub use error::{CompareError, CompareResult, ConfigError, DoppelError, Result};
pub use types::{CatalogProduct, ComparisonResult, Confidence, PairwiseReport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_detector_holds_config() {
        let detector = DuplicateDetector::new(Config::default()).unwrap();
        assert_eq!(detector.config().hash.grid_side, 16);
    }
}
