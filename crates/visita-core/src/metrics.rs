// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Compression metrics, per image and per document.

use serde::{Deserialize, Serialize};

/// Before/after figures for one normalized image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMetrics {
    pub original_size_bytes: usize,
    pub normalized_size_bytes: usize,
    /// (width, height) of the decoded upload.
    pub original_dimensions: (u32, u32),
    /// (width, height) after the width bound was applied.
    pub final_dimensions: (u32, u32),
    /// original / normalized, 2 decimals; 0 when nothing was produced.
    pub compression_ratio: f64,
    /// `(1 - normalized/original) * 100`, 1 decimal. Negative when the
    /// re-encode grew the file.
    pub size_reduction_percent: f64,
}

impl ImageMetrics {
    pub fn new(
        original_size_bytes: usize,
        normalized_size_bytes: usize,
        original_dimensions: (u32, u32),
        final_dimensions: (u32, u32),
    ) -> Self {
        Self {
            original_size_bytes,
            normalized_size_bytes,
            original_dimensions,
            final_dimensions,
            compression_ratio: compression_ratio(original_size_bytes, normalized_size_bytes),
            size_reduction_percent: size_reduction_percent(
                original_size_bytes,
                normalized_size_bytes,
            ),
        }
    }
}

/// Summary over a whole batch and the document built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub images_count: usize,
    pub total_original_bytes: usize,
    pub total_normalized_bytes: usize,
    /// total original / total normalized, 2 decimals; 0 when the
    /// normalized total is 0.
    pub overall_compression_ratio: f64,
    pub document_size_bytes: usize,
}

impl AggregateMetrics {
    pub fn from_images(images: &[ImageMetrics], document_size_bytes: usize) -> Self {
        let total_original_bytes = images.iter().map(|m| m.original_size_bytes).sum();
        let total_normalized_bytes = images.iter().map(|m| m.normalized_size_bytes).sum();
        Self {
            images_count: images.len(),
            total_original_bytes,
            total_normalized_bytes,
            overall_compression_ratio: compression_ratio(
                total_original_bytes,
                total_normalized_bytes,
            ),
            document_size_bytes,
        }
    }
}

/// `original / normalized` rounded to 2 decimals, or 0 if `normalized` is 0.
pub fn compression_ratio(original: usize, normalized: usize) -> f64 {
    if normalized == 0 {
        return 0.0;
    }
    round_to(original as f64 / normalized as f64, 2)
}

/// `(1 - normalized/original) * 100` rounded to 1 decimal, or 0 if
/// `original` is 0. Never clamped.
pub fn size_reduction_percent(original: usize, normalized: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    round_to((1.0 - normalized as f64 / original as f64) * 100.0, 1)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_rounds_to_two_decimals() {
        assert_eq!(compression_ratio(350_000, 150_000), 2.33);
        assert_eq!(compression_ratio(100, 300), 0.33);
    }

    #[test]
    fn zero_normalized_size_gives_zero_ratio() {
        assert_eq!(compression_ratio(1234, 0), 0.0);
        assert_eq!(compression_ratio(0, 0), 0.0);
    }

    #[test]
    fn growth_keeps_negative_reduction() {
        assert_eq!(size_reduction_percent(1000, 1250), -25.0);
        assert_eq!(size_reduction_percent(3000, 1000), 66.7);
        assert_eq!(size_reduction_percent(0, 10), 0.0);
    }

    #[test]
    fn aggregate_sums_batch() {
        let images = vec![
            ImageMetrics::new(100_000, 50_000, (1600, 1200), (800, 600)),
            ImageMetrics::new(200_000, 80_000, (4000, 3000), (800, 600)),
            ImageMetrics::new(50_000, 20_000, (640, 480), (640, 480)),
        ];
        let aggregate = AggregateMetrics::from_images(&images, 180_000);

        assert_eq!(aggregate.images_count, 3);
        assert_eq!(aggregate.total_original_bytes, 350_000);
        assert_eq!(aggregate.total_normalized_bytes, 150_000);
        assert_eq!(aggregate.overall_compression_ratio, 2.33);
        assert_eq!(aggregate.document_size_bytes, 180_000);
    }

    #[test]
    fn empty_aggregate_has_zero_ratio() {
        let aggregate = AggregateMetrics::from_images(&[], 0);
        assert_eq!(aggregate.overall_compression_ratio, 0.0);
        assert_eq!(aggregate.images_count, 0);
    }

    #[test]
    fn per_image_metrics_derive_ratios() {
        let m = ImageMetrics::new(100_000, 40_000, (1000, 500), (800, 400));
        assert_eq!(m.compression_ratio, 2.5);
        assert_eq!(m.size_reduction_percent, 60.0);
    }
}
