//! Duplicate detection over a product catalog.
//!
//! The detector scans a candidate image against every catalog product with an
//! image, combining perceptual hash and dominant color similarity into one
//! score per candidate and keeping the best. Its contract is total: a scan
//! always produces a `ComparisonResult`, never an error. Load and comparison
//! failures degrade the affected candidate to zero similarity and are logged
//! at `warn` so operators can tell "no duplicate" from "comparison degraded".

use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{CompareError, CompareResult, ConfigError};
use crate::types::{CatalogProduct, ComparisonResult, PairwiseReport};

use super::fetch::{HttpFetcher, ImageFetcher};
use super::hash::{HashGenerator, PerceptualHash};
use super::loader::ImageLoader;
use super::palette::{ColorPalette, PaletteExtractor};
use super::score::{color_similarity, hash_similarity};

/// Detects near-duplicate product images.
///
/// Holds configuration only; no state persists between scans, so one instance
/// can serve any number of calls. Candidates are scanned sequentially; they
/// are independent and could be fanned out, provided equal scores still
/// resolve to the first candidate in catalog order.
pub struct DuplicateDetector {
    config: Config,
    loader: ImageLoader,
    hasher: HashGenerator,
    palettes: PaletteExtractor,
}

impl fmt::Debug for DuplicateDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DuplicateDetector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DuplicateDetector {
    /// Create a detector that fetches images over HTTP.
    ///
    /// Fails when the configuration is invalid (zero grids or timeouts,
    /// unbalanced weights); `Config::load_from` catches the same problems for
    /// file-based configs, this catches programmatically built ones.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_fetcher(config, Arc::new(HttpFetcher::new()))
    }

    /// Create a detector over a custom fetcher (tests, caching layers).
    pub fn with_fetcher(
        config: Config,
        fetcher: Arc<dyn ImageFetcher>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let loader = ImageLoader::new(fetcher, config.loader.clone());
        let hasher = HashGenerator::new(&config.hash);
        let palettes = PaletteExtractor::new(config.palette.clone());
        Ok(Self {
            config,
            loader,
            hasher,
            palettes,
        })
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check a new image against every existing catalog product.
    ///
    /// Returns the trivial no-match verdict immediately for an empty URL or
    /// an empty catalog. A failure to load the new image itself also yields
    /// the trivial verdict — the admin workflow must never block on a broken
    /// upload. Products without an image reference are skipped entirely.
    pub async fn detect_duplicate(
        &self,
        new_image_url: &str,
        catalog: &[CatalogProduct],
    ) -> ComparisonResult {
        if new_image_url.is_empty() || catalog.is_empty() {
            return ComparisonResult::no_match();
        }

        tracing::debug!(
            candidates = catalog.len(),
            url = new_image_url,
            "Starting duplicate scan"
        );

        let new_hash = match self.hash_from_url(new_image_url).await {
            Ok(hash) => hash,
            Err(e) => {
                tracing::warn!("Could not hash new image, reporting no match: {e}");
                return ComparisonResult::no_match();
            }
        };

        // The subject's palette is reused across candidates; losing it only
        // degrades the color signal, not the whole scan.
        let new_palette = match self.palette_from_url(new_image_url).await {
            Ok(palette) => Some(palette),
            Err(e) => {
                tracing::warn!("No color signal for new image: {e}");
                None
            }
        };

        let mut best_similarity = 0.0_f64;
        let mut best_product: Option<&CatalogProduct> = None;

        for product in catalog {
            let Some(image_url) = product.image_url() else {
                tracing::debug!(product = %product.name, "Skipped: no image");
                continue;
            };

            let hash_score = match self.candidate_hash_score(&new_hash, image_url).await {
                Ok(score) => score,
                Err(e) => {
                    tracing::warn!(product = %product.name, "Hash comparison degraded: {e}");
                    0.0
                }
            };

            let color_score = match &new_palette {
                Some(palette) => match self.candidate_color_score(palette, image_url).await {
                    Ok(score) => score,
                    Err(e) => {
                        tracing::warn!(product = %product.name, "Color comparison degraded: {e}");
                        0.0
                    }
                },
                None => 0.0,
            };

            let combined = self.config.scoring.combine(hash_score, color_score);
            tracing::debug!(
                product = %product.name,
                hash = hash_score,
                color = color_score,
                combined = combined,
                "Scored candidate"
            );

            // Strict comparison: ties keep the first-seen candidate.
            if combined > best_similarity {
                best_similarity = combined;
                best_product = Some(product);
            }
        }

        let is_match = self.config.thresholds.is_match(best_similarity);
        let confidence = self.config.thresholds.classify(best_similarity);

        let result = ComparisonResult {
            is_match,
            similarity: (best_similarity * 10.0).round() / 10.0,
            matched_product: if is_match {
                best_product.cloned()
            } else {
                None
            },
            confidence,
        };

        match &result.matched_product {
            Some(product) => tracing::info!(
                product = %product.name,
                similarity = result.similarity,
                confidence = ?result.confidence,
                "Duplicate detected"
            ),
            None => tracing::info!(
                best = result.similarity,
                "No duplicate found"
            ),
        }

        result
    }

    /// Score two explicit images against each other.
    ///
    /// Diagnostic entry point for tuning; unlike `detect_duplicate` it
    /// propagates load errors instead of absorbing them.
    pub async fn compare_pair(&self, left: &str, right: &str) -> CompareResult<PairwiseReport> {
        let left_hash = self.hash_from_url(left).await?;
        let right_hash = self.hash_from_url(right).await?;
        let hash_score = hash_similarity(&left_hash, &right_hash)?;

        let left_palette = self.palette_from_url(left).await?;
        let right_palette = self.palette_from_url(right).await?;
        let color_score = color_similarity(&left_palette, &right_palette);

        Ok(PairwiseReport {
            hash_similarity: hash_score,
            color_similarity: color_score,
            combined: self.config.scoring.combine(hash_score, color_score),
        })
    }

    /// Load a candidate image and score its hash against the subject's.
    async fn candidate_hash_score(
        &self,
        new_hash: &PerceptualHash,
        url: &str,
    ) -> CompareResult<f64> {
        let candidate = self.hash_from_url(url).await?;
        hash_similarity(new_hash, &candidate)
    }

    /// Load a candidate image and score its palette against the subject's.
    async fn candidate_color_score(
        &self,
        new_palette: &ColorPalette,
        url: &str,
    ) -> CompareResult<f64> {
        let candidate = self.palette_from_url(url).await?;
        Ok(color_similarity(new_palette, &candidate))
    }

    async fn hash_from_url(&self, url: &str) -> CompareResult<PerceptualHash> {
        let image = self
            .loader
            .load(url, self.config.loader.hash_timeout_ms)
            .await?;
        Ok(self.hasher.hash(&image))
    }

    /// Extract a palette, reporting a fully transparent image as
    /// `EmptyPalette` so the caller can absorb it like any other degradation.
    async fn palette_from_url(&self, url: &str) -> CompareResult<ColorPalette> {
        let image = self
            .loader
            .load(url, self.config.loader.color_timeout_ms)
            .await?;
        let palette = self.palettes.extract(&image);
        if palette.is_empty() {
            return Err(CompareError::EmptyPalette {
                url: url.to_string(),
            });
        }
        Ok(palette)
    }
}
