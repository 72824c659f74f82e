//! Image comparison pipeline components.
//!
//! This module contains all the stages of the duplicate-detection pipeline:
//! - **fetch**: Retrieve raw image bytes by URL
//! - **loader**: Decode fetched bytes with timeout and cache-busting
//! - **hash**: Generate luminosity-based perceptual hashes
//! - **palette**: Extract dominant color palettes
//! - **score**: Hamming and color-distance similarity scoring
//! - **detector**: Orchestrates the scan over the catalog

pub mod detector;
pub mod fetch;
pub mod hash;
pub mod loader;
pub mod palette;
pub mod score;

// Re-exports for convenient access
pub use detector::DuplicateDetector;
pub use fetch::{HttpFetcher, ImageFetcher};
pub use hash::{HashGenerator, PerceptualHash};
pub use loader::ImageLoader;
pub use palette::{ColorPalette, PaletteExtractor, Rgb};
pub use score::{color_similarity, hash_similarity};
