//! Sub-configuration structs with the documented pipeline defaults.

use crate::types::Confidence;
use serde::{Deserialize, Serialize};

/// Image loading settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Timeout for loads feeding the perceptual hash, in milliseconds
    pub hash_timeout_ms: u64,

    /// Timeout for loads feeding color extraction, in milliseconds
    pub color_timeout_ms: u64,

    /// Append a timestamp query parameter to defeat stale cached responses
    pub cache_bust: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            hash_timeout_ms: 10_000,
            color_timeout_ms: 8_000,
            cache_bust: true,
        }
    }
}

/// Perceptual hash settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Side of the square downsample grid; the hash is `grid_side²` bits
    pub grid_side: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self { grid_side: 16 }
    }
}

/// Dominant color palette settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Side of the square working grid for color counting
    pub grid_side: u32,

    /// Maximum number of dominant colors to keep
    pub max_colors: usize,

    /// Channel quantization step; 16 reduces 256 levels to 16 buckets
    pub quantize_step: u8,

    /// Pixels with alpha below this value do not contribute to color identity
    pub alpha_threshold: u8,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            grid_side: 40,
            max_colors: 5,
            quantize_step: 16,
            alpha_threshold: 128,
        }
    }
}

/// Similarity weighting between the hash and color signals.
///
/// The weights must sum to 1.0; this is enforced by validation, not derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of the perceptual hash similarity
    pub hash_weight: f64,

    /// Weight of the dominant color similarity
    pub color_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            hash_weight: 0.6,
            color_weight: 0.4,
        }
    }
}

impl ScoringConfig {
    /// Combine the two sub-scores under the configured weights.
    pub fn combine(&self, hash_similarity: f64, color_similarity: f64) -> f64 {
        hash_similarity * self.hash_weight + color_similarity * self.color_weight
    }
}

/// Match and confidence thresholds, all in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Minimum combined similarity to report a match
    pub match_threshold: f64,

    /// Lower bound of the medium confidence tier
    pub medium_confidence: f64,

    /// Lower bound of the high confidence tier
    pub high_confidence: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            match_threshold: 65.0,
            medium_confidence: 75.0,
            high_confidence: 85.0,
        }
    }
}

impl ThresholdConfig {
    /// Classify a combined similarity into a confidence tier.
    ///
    /// Boundaries are inclusive on the lower edge of each tier.
    pub fn classify(&self, similarity: f64) -> Confidence {
        if similarity >= self.high_confidence {
            Confidence::High
        } else if similarity >= self.medium_confidence {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    /// Whether a combined similarity clears the match threshold.
    pub fn is_match(&self, similarity: f64) -> bool {
        similarity >= self.match_threshold
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries_are_inclusive() {
        let thresholds = ThresholdConfig::default();
        assert_eq!(thresholds.classify(85.0), Confidence::High);
        assert_eq!(thresholds.classify(84.9), Confidence::Medium);
        assert_eq!(thresholds.classify(75.0), Confidence::Medium);
        assert_eq!(thresholds.classify(74.9), Confidence::Low);
        assert_eq!(thresholds.classify(0.0), Confidence::Low);
    }

    #[test]
    fn test_match_threshold_boundary() {
        let thresholds = ThresholdConfig::default();
        assert!(thresholds.is_match(65.0));
        assert!(!thresholds.is_match(64.9));
        assert!(thresholds.is_match(100.0));
    }

    #[test]
    fn test_combine_uses_weights() {
        let scoring = ScoringConfig::default();
        let combined = scoring.combine(100.0, 50.0);
        assert!((combined - 80.0).abs() < 1e-9);

        let custom = ScoringConfig {
            hash_weight: 1.0,
            color_weight: 0.0,
        };
        assert_eq!(custom.combine(42.0, 99.0), 42.0);
    }
}
