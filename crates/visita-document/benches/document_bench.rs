// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the visita-document crate: single-photo
// normalization and a small ordered batch.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use visita_core::{PipelineConfig, RawImage};
use visita_document::{BatchImageProcessor, normalize};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A gradient PNG roughly the size of a phone photo scaled down, wide enough
/// that the width bound always applies.
fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    });
    let mut buffer = std::io::Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("encode fixture");
    buffer.into_inner()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_normalize(c: &mut Criterion) {
    let png = gradient_png(1600, 1200);
    c.bench_function("normalize (1600x1200 -> 800)", |b| {
        b.iter(|| {
            let out = normalize(black_box(&png), 800, 85).expect("normalize");
            black_box(out);
        });
    });
}

fn bench_batch(c: &mut Criterion) {
    let images: Vec<RawImage> = (0..8)
        .map(|_| RawImage::new(gradient_png(1200, 900), "image/png"))
        .collect();
    let processor = BatchImageProcessor::new(&PipelineConfig::default()).expect("pool");

    c.bench_function("process_all (8 x 1200x900)", |b| {
        b.iter(|| {
            let batch = processor.process_all(black_box(&images)).expect("batch");
            black_box(batch);
        });
    });
}

criterion_group!(benches, bench_normalize, bench_batch);
criterion_main!(benches);
