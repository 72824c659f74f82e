//! Core data types for duplicate detection.
//!
//! These types cross the boundary between the detector and its callers: the
//! catalog view it consumes read-only, and the verdict it produces.

use serde::{Deserialize, Serialize};

/// Minimal read-only view of a persisted catalog product.
///
/// Owned and mutated by the product-persistence collaborator; the detector
/// only reads it. Products without an image are skipped during a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Stable product identifier
    pub id: String,

    /// Display name, used only for logging
    pub name: String,

    /// Image reference; `None` or empty means "no image"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CatalogProduct {
    /// The product's image URL, treating an empty string as absent.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// How trustworthy a similarity score is, derived from fixed threshold bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Best similarity at or above the high-confidence threshold (default 85)
    High,
    /// Best similarity at or above the medium threshold (default 75)
    Medium,
    /// Everything below the medium threshold
    Low,
}

/// The verdict of one duplicate-check call.
///
/// Produced once per scan and consumed by the admin workflow to decide
/// whether to merge into an existing product or create a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Whether the best candidate cleared the match threshold
    pub is_match: bool,

    /// Best combined similarity in percent, rounded to one decimal place
    pub similarity: f64,

    /// The best-matching product, populated only when `is_match` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_product: Option<CatalogProduct>,

    /// Confidence tier for the best similarity
    pub confidence: Confidence,
}

impl ComparisonResult {
    /// The trivial no-match verdict: empty input, failed subject image, or
    /// nothing in the catalog cleared zero similarity.
    pub fn no_match() -> Self {
        Self {
            is_match: false,
            similarity: 0.0,
            matched_product: None,
            confidence: Confidence::Low,
        }
    }
}

/// Intermediate scores for one explicit pair of images.
///
/// Diagnostic output for tuning thresholds; not part of the production flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairwiseReport {
    /// Hamming-based hash similarity in percent
    pub hash_similarity: f64,

    /// Dominant-color similarity in percent (left palette as query)
    pub color_similarity: f64,

    /// Weighted combination of the two
    pub combined: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_filters_empty() {
        let mut product = CatalogProduct {
            id: "p1".to_string(),
            name: "Velvet Matte Lipstick".to_string(),
            image_url: Some(String::new()),
        };
        assert!(product.image_url().is_none());

        product.image_url = None;
        assert!(product.image_url().is_none());

        product.image_url = Some("https://cdn.example.com/lipstick.jpg".to_string());
        assert_eq!(
            product.image_url(),
            Some("https://cdn.example.com/lipstick.jpg")
        );
    }

    #[test]
    fn test_no_match_shape() {
        let result = ComparisonResult::no_match();
        assert!(!result.is_match);
        assert_eq!(result.similarity, 0.0);
        assert!(result.matched_product.is_none());
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_result_serde_skips_absent_product() {
        let result = ComparisonResult::no_match();
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("matched_product"));
        assert!(json.contains("\"confidence\":\"low\""));

        let parsed: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert!(parsed.matched_product.is_none());
    }

    #[test]
    fn test_catalog_product_deserializes_without_image() {
        let product: CatalogProduct =
            serde_json::from_str(r#"{"id":"p2","name":"Rose Serum"}"#).unwrap();
        assert!(product.image_url.is_none());
    }
}
