//! Luminosity-based perceptual hashing.
//!
//! The image is downsampled to a fixed square grid, each pixel reduced to its
//! perceptual luminosity (0.299R + 0.587G + 0.114B), and one bit emitted per
//! pixel in row-major order: 1 if strictly brighter than the grid average.
//! Visually similar images land at small Hamming distance.

use image::{imageops::FilterType, DynamicImage};
use std::fmt;

use crate::config::HashConfig;
use crate::error::{CompareError, CompareResult};

/// A fixed-length bit fingerprint of an image's luminosity pattern.
///
/// Always `grid_side²` bits for the configured grid; two hashes are only
/// comparable when their lengths match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerceptualHash {
    bits: Vec<u8>,
}

impl PerceptualHash {
    /// Number of bits in the hash.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Count of differing bit positions between two equal-length hashes.
    ///
    /// Fails with `IncomparableHashes` if the lengths differ or either hash
    /// is empty — defensive, since fixed grids make lengths equal by
    /// construction.
    pub fn hamming_distance(&self, other: &PerceptualHash) -> CompareResult<u32> {
        if self.is_empty() || other.is_empty() || self.len() != other.len() {
            return Err(CompareError::IncomparableHashes {
                left: self.len(),
                right: other.len(),
            });
        }
        let distance = self
            .bits
            .iter()
            .zip(&other.bits)
            .filter(|(a, b)| a != b)
            .count() as u32;
        Ok(distance)
    }

    /// Fraction of set bits; useful for diagnostics only.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }
}

impl fmt::Display for PerceptualHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

/// Generates perceptual hashes for a fixed grid side.
pub struct HashGenerator {
    grid_side: u32,
}

impl HashGenerator {
    /// Create a new generator from configuration.
    pub fn new(config: &HashConfig) -> Self {
        Self {
            grid_side: config.grid_side,
        }
    }

    /// Hash an image into a `grid_side²`-bit fingerprint.
    ///
    /// Deterministic: two calls on the same bitmap are bit-identical.
    pub fn hash(&self, image: &DynamicImage) -> PerceptualHash {
        let side = self.grid_side;
        let small = image
            .resize_exact(side, side, FilterType::Lanczos3)
            .to_rgba8();

        // Milli-luminosity keeps the computation in exact integer arithmetic:
        // a pixel is brighter than the average iff lum * count > total.
        // A uniform image therefore hashes to all zeros (nothing is strictly
        // greater than the mean).
        let lums: Vec<u64> = small
            .pixels()
            .map(|p| 299 * u64::from(p[0]) + 587 * u64::from(p[1]) + 114 * u64::from(p[2]))
            .collect();
        let total: u64 = lums.iter().sum();
        let count = lums.len() as u64;

        let bits = lums
            .iter()
            .map(|&lum| u8::from(lum * count > total))
            .collect();

        PerceptualHash { bits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn generator() -> HashGenerator {
        HashGenerator::new(&HashConfig::default())
    }

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    /// Left half black, right half white.
    fn split_image() -> DynamicImage {
        let img = RgbaImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_hash_is_deterministic() {
        let img = split_image();
        let gen = generator();
        assert_eq!(gen.hash(&img), gen.hash(&img));
    }

    #[test]
    fn test_hash_length_is_grid_squared() {
        let gen = generator();
        for (w, h) in [(16, 16), (640, 480), (3, 1000)] {
            let hash = gen.hash(&solid(w, h, [10, 200, 30, 255]));
            assert_eq!(hash.len(), 256);
        }

        let small_grid = HashGenerator::new(&HashConfig { grid_side: 8 });
        assert_eq!(small_grid.hash(&split_image()).len(), 64);
    }

    #[test]
    fn test_uniform_image_hashes_to_all_zeros() {
        let hash = generator().hash(&solid(50, 50, [137, 42, 209, 255]));
        assert_eq!(hash.ones(), 0);
    }

    #[test]
    fn test_split_image_sets_bright_half() {
        let hash = generator().hash(&split_image());
        // Roughly half the bits should be set; the resample blurs the seam.
        assert!(hash.ones() >= 112 && hash.ones() <= 144);
    }

    #[test]
    fn test_hamming_distance_is_symmetric() {
        let gen = generator();
        let a = gen.hash(&split_image());
        let b = gen.hash(&solid(64, 64, [255, 255, 255, 255]));
        assert_eq!(
            a.hamming_distance(&b).unwrap(),
            b.hamming_distance(&a).unwrap()
        );
    }

    #[test]
    fn test_hamming_distance_to_self_is_zero() {
        let hash = generator().hash(&split_image());
        assert_eq!(hash.hamming_distance(&hash).unwrap(), 0);
    }

    #[test]
    fn test_mismatched_lengths_are_incomparable() {
        let a = generator().hash(&split_image());
        let b = HashGenerator::new(&HashConfig { grid_side: 8 }).hash(&split_image());
        let err = a.hamming_distance(&b).unwrap_err();
        assert!(matches!(
            err,
            CompareError::IncomparableHashes {
                left: 256,
                right: 64
            }
        ));
    }

    #[test]
    fn test_display_renders_bit_string() {
        let hash = generator().hash(&solid(16, 16, [0, 0, 0, 255]));
        let rendered = hash.to_string();
        assert_eq!(rendered.len(), 256);
        assert!(rendered.chars().all(|c| c == '0'));
    }
}
