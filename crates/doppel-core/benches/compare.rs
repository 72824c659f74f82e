//! Benchmarks for the Doppel comparison pipeline.
//!
//! Run with: cargo bench -p doppel-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use doppel_core::compare::{HashGenerator, PaletteExtractor};
use doppel_core::config::{HashConfig, PaletteConfig};
use image::{DynamicImage, Rgba, RgbaImage};

fn sample_image() -> DynamicImage {
    let img = RgbaImage::from_fn(512, 512, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    DynamicImage::ImageRgba8(img)
}

fn benchmark_perceptual_hash(c: &mut Criterion) {
    let img = sample_image();
    let hasher = HashGenerator::new(&HashConfig::default());

    c.bench_function("perceptual_hash_16x16", |b| {
        b.iter(|| {
            let _ = hasher.hash(black_box(&img));
        })
    });
}

fn benchmark_palette_extraction(c: &mut Criterion) {
    let img = sample_image();
    let extractor = PaletteExtractor::new(PaletteConfig::default());

    c.bench_function("palette_40x40_top5", |b| {
        b.iter(|| {
            let _ = extractor.extract(black_box(&img));
        })
    });
}

fn benchmark_pairwise_score(c: &mut Criterion) {
    let img = sample_image();
    let hasher = HashGenerator::new(&HashConfig::default());
    let extractor = PaletteExtractor::new(PaletteConfig::default());
    let hash = hasher.hash(&img);
    let palette = extractor.extract(&img);

    c.bench_function("pairwise_score", |b| {
        b.iter(|| {
            let h = doppel_core::compare::hash_similarity(black_box(&hash), black_box(&hash));
            let p =
                doppel_core::compare::color_similarity(black_box(&palette), black_box(&palette));
            let _ = (h, p);
        })
    });
}

criterion_group!(
    benches,
    benchmark_perceptual_hash,
    benchmark_palette_extraction,
    benchmark_pairwise_score
);
criterion_main!(benches);
