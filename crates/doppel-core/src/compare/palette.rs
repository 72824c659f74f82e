//! Dominant color extraction.
//!
//! The image is downsampled to a small working grid, each channel quantized
//! into coarse buckets so near-identical shades group together, and the most
//! frequent quantized colors returned as the image's color signature.
//! Near-transparent pixels do not contribute.

use image::{imageops::FilterType, DynamicImage};
use std::collections::HashMap;

use crate::config::PaletteConfig;

/// One quantized color as `[r, g, b]`.
pub type Rgb = [u8; 3];

/// Up to `max_colors` quantized colors, ordered by descending frequency.
///
/// May be empty when the source image has no visible pixels; callers treat
/// that as "no color signal", not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPalette {
    colors: Vec<Rgb>,
}

impl ColorPalette {
    /// The palette entries, most frequent first.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_colors(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }
}

/// Extracts dominant color palettes from decoded images.
pub struct PaletteExtractor {
    config: PaletteConfig,
}

impl PaletteExtractor {
    /// Create a new extractor from configuration.
    ///
    /// Expects validated configuration: `quantize_step` must be non-zero,
    /// which `Config::validate` (run on file load and detector construction)
    /// enforces.
    pub fn new(config: PaletteConfig) -> Self {
        Self { config }
    }

    /// Extract the dominant colors of an image.
    ///
    /// Frequency ties keep first-seen raster order so repeated extraction is
    /// deterministic.
    pub fn extract(&self, image: &DynamicImage) -> ColorPalette {
        let side = self.config.grid_side;
        let step = u16::from(self.config.quantize_step);
        let small = image
            .resize_exact(side, side, FilterType::Triangle)
            .to_rgba8();

        // (count, first raster index) per quantized color
        let mut counts: HashMap<Rgb, (u32, usize)> = HashMap::new();
        for (index, pixel) in small.pixels().enumerate() {
            if pixel[3] < self.config.alpha_threshold {
                continue;
            }
            let quantized = [
                quantize(pixel[0], step),
                quantize(pixel[1], step),
                quantize(pixel[2], step),
            ];
            let entry = counts.entry(quantized).or_insert((0, index));
            entry.0 += 1;
        }

        let mut ranked: Vec<(Rgb, (u32, usize))> = counts.into_iter().collect();
        ranked.sort_by(|(_, (count_a, seen_a)), (_, (count_b, seen_b))| {
            count_b.cmp(count_a).then(seen_a.cmp(seen_b))
        });
        ranked.truncate(self.config.max_colors);

        ColorPalette {
            colors: ranked.into_iter().map(|(color, _)| color).collect(),
        }
    }
}

/// Floor a channel value to its bucket's representative value.
fn quantize(value: u8, step: u16) -> u8 {
    ((u16::from(value) / step) * step) as u8
}
