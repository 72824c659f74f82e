//! Similarity scoring between hashes and palettes.
//!
//! Two independent sub-scores, each normalized to percent, later combined
//! under the configured weights. Hash similarity is symmetric; color
//! similarity is not — the query palette drives the comparison, and palettes
//! of different sizes can score differently depending on direction. That
//! asymmetry is accepted: the query is always the new image.

use crate::error::CompareResult;

use super::hash::PerceptualHash;
use super::palette::{ColorPalette, Rgb};

/// Hamming-based similarity between two hashes, in percent.
///
/// `(bits - distance) / bits * 100`. Fails with `IncomparableHashes` when the
/// hashes cannot be compared; the detector treats that as zero similarity.
pub fn hash_similarity(a: &PerceptualHash, b: &PerceptualHash) -> CompareResult<f64> {
    let distance = a.hamming_distance(b)?;
    let bits = a.len() as f64;
    Ok((bits - f64::from(distance)) / bits * 100.0)
}

/// Palette-level color similarity, in percent, with `query` as the subject.
///
/// For every query color, the nearest candidate color by Euclidean RGB
/// distance contributes `max(0, (255 - distance) / 255 * 100)`; the result is
/// the average over the query palette. Either palette being empty means no
/// color signal and scores 0.
pub fn color_similarity(query: &ColorPalette, candidate: &ColorPalette) -> f64 {
    if query.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let total: f64 = query
        .colors()
        .iter()
        .map(|&color| {
            let best = candidate
                .colors()
                .iter()
                .map(|&other| color_distance(color, other))
                .fold(f64::INFINITY, f64::min);
            ((255.0 - best) / 255.0 * 100.0).max(0.0)
        })
        .sum();

    total / query.len() as f64
}

/// Euclidean distance between two colors in RGB space.
fn color_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a[0]) - f64::from(b[0]);
    let dg = f64::from(a[1]) - f64::from(b[1]);
    let db = f64::from(a[2]) - f64::from(b[2]);
    (dr * dr + dg * dg + db * db).sqrt()
}
