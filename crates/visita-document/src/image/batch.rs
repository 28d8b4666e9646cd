// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch normalization — runs the normalizer over every evidence photo of a
// report on a bounded worker pool and reassembles the results in input order.
//
// Each task carries its origin index and lands in a fixed-size slot buffer,
// so completion order never leaks into the output. A failure cancels every
// not-yet-started task with a higher index; lower indices still run so the
// reported failure is always the lowest failing position.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};
use visita_core::error::{Result, VisitaError};
use visita_core::metrics::ImageMetrics;
use visita_core::{PipelineConfig, RawImage};

use super::embed::{NORMALIZED_MEDIA_TYPE, to_embeddable};
use super::normalizer::{NormalizeSettings, normalize};

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// One normalized photo, tagged with its position in the submitted batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAsset {
    /// Zero-based position of the source photo.
    pub index: usize,
    /// Baseline JPEG bytes.
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl NormalizedAsset {
    pub fn media_type(&self) -> &'static str {
        NORMALIZED_MEDIA_TYPE
    }

    /// Inline `data:` URI for direct embedding in the document.
    pub fn to_embeddable(&self) -> String {
        to_embeddable(&self.bytes)
    }
}

/// Assets and metrics for a whole batch; both in input order, same length
/// as the input.
#[derive(Debug, Clone)]
pub struct ProcessedBatch {
    pub assets: Vec<NormalizedAsset>,
    pub metrics: Vec<ImageMetrics>,
}

impl ProcessedBatch {
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Embeddable representations, in input order.
    pub fn embeddable(&self) -> Vec<String> {
        self.assets.iter().map(NormalizedAsset::to_embeddable).collect()
    }
}

/// Normalizes report photos in parallel while preserving their order.
///
/// Holds only read-only settings and its worker pool, so one instance can
/// be shared between concurrent requests.
pub struct BatchImageProcessor {
    settings: NormalizeSettings,
    pool: rayon::ThreadPool,
}

impl BatchImageProcessor {
    /// Build a processor from the pipeline configuration.
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let threads = config.worker_threads.unwrap_or_else(default_worker_count);
        Self::with_threads(NormalizeSettings::from(config), threads)
    }

    /// Build a processor with explicit settings and pool size.
    pub fn with_threads(settings: NormalizeSettings, threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .thread_name(|i| format!("visita-normalize-{i}"))
            .build()
            .map_err(|err| VisitaError::WorkerPool(err.to_string()))?;
        debug!(threads = pool.current_num_threads(), "Normalization pool ready");
        Ok(Self { settings, pool })
    }

    /// Default width bound and quality.
    pub fn settings(&self) -> NormalizeSettings {
        self.settings
    }

    /// Number of normalization workers.
    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Normalize every photo with the default settings.
    pub fn process_all(&self, images: &[RawImage]) -> Result<ProcessedBatch> {
        self.process_all_with(images, self.settings)
    }

    /// Normalize every photo with explicit settings.
    ///
    /// Fails with the lowest-index failure wrapped in
    /// [`VisitaError::ImageFailed`]; no partial batch is returned.
    #[instrument(skip(self, images), fields(images = images.len(), max_width = settings.max_width, quality = settings.quality))]
    pub fn process_all_with(
        &self,
        images: &[RawImage],
        settings: NormalizeSettings,
    ) -> Result<ProcessedBatch> {
        let lowest_failure = AtomicUsize::new(usize::MAX);

        let outcomes: Vec<(usize, Option<Result<(Vec<u8>, ImageMetrics)>>)> =
            self.pool.install(|| {
                images
                    .par_iter()
                    .enumerate()
                    .map(|(index, raw)| {
                        if index > lowest_failure.load(Ordering::Acquire) {
                            return (index, None);
                        }
                        let outcome = normalize(&raw.bytes, settings.max_width, settings.quality);
                        if outcome.is_err() {
                            lowest_failure.fetch_min(index, Ordering::AcqRel);
                        }
                        (index, Some(outcome))
                    })
                    .collect()
            });

        let mut slots: Vec<Option<(Vec<u8>, ImageMetrics)>> = vec![None; images.len()];
        let mut failure: Option<(usize, VisitaError)> = None;
        for (index, outcome) in outcomes {
            match outcome {
                Some(Ok(done)) => slots[index] = Some(done),
                Some(Err(err)) => {
                    if failure.as_ref().is_none_or(|(seen, _)| index < *seen) {
                        failure = Some((index, err));
                    }
                }
                None => {}
            }
        }

        if let Some((index, err)) = failure {
            warn!(index, position = index + 1, error = %err, "Batch aborted");
            return Err(err.at_image(index));
        }

        let mut assets = Vec::with_capacity(slots.len());
        let mut metrics = Vec::with_capacity(slots.len());
        for (index, slot) in slots.into_iter().enumerate() {
            let (bytes, image_metrics) = slot.ok_or_else(|| {
                VisitaError::WorkerPool(format!("no result was produced for image {}", index + 1))
            })?;
            let (width, height) = image_metrics.final_dimensions;
            assets.push(NormalizedAsset {
                index,
                bytes,
                width,
                height,
            });
            metrics.push(image_metrics);
        }

        info!(images = assets.len(), "Batch normalized");
        Ok(ProcessedBatch { assets, metrics })
    }
}

/// Whether `raw` is no larger than `max_megabytes` (1 MB = 1024 * 1024 bytes).
pub fn within_size_limit(raw: &[u8], max_megabytes: u32) -> bool {
    raw.len() as f64 / BYTES_PER_MEGABYTE <= f64::from(max_megabytes)
}

/// [`within_size_limit`] as an error for the pipeline's fail-fast check.
pub fn check_size(raw: &[u8], max_megabytes: u32) -> Result<()> {
    if within_size_limit(raw, max_megabytes) {
        Ok(())
    } else {
        Err(VisitaError::OversizeImage {
            actual_bytes: raw.len(),
            limit_mb: max_megabytes,
        })
    }
}

fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
