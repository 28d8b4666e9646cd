// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Report assembly — normalize every evidence photo, render the document,
// aggregate metrics and derive the output filename.
//
// Any failing step short-circuits; callers never see a partial artifact.

use std::sync::Arc;

use chrono::Local;
use tracing::{Instrument, info, info_span, instrument};
use visita_core::error::{Result, VisitaError};
use visita_core::{
    AggregateMetrics, DocumentArtifact, PipelineConfig, PreviewEstimate, RawImage, ReportData,
    RunId,
};

use crate::image::batch::{BatchImageProcessor, check_size};
use crate::pdf::renderer::DocumentRenderer;

const FILENAME_PREFIX: &str = "visita_obra";
const MAX_NAME_CHARS: usize = 50;
const PREVIEW_SIZE_FACTOR: f64 = 0.3;

/// Turns validated report data and raw photos into a finished document.
///
/// Holds read-only configuration, a worker pool and a renderer, so one
/// instance serves any number of concurrent assemblies.
pub struct ReportAssembler<R: DocumentRenderer> {
    config: PipelineConfig,
    processor: BatchImageProcessor,
    renderer: R,
}

impl<R: DocumentRenderer> ReportAssembler<R> {
    /// Validate `config` and build the worker pool.
    pub fn new(config: PipelineConfig, renderer: R) -> Result<Self> {
        config.validate()?;
        let processor = BatchImageProcessor::new(&config)?;
        Ok(Self {
            config,
            processor,
            renderer,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run the full pipeline for one report.
    #[instrument(skip_all, fields(run = %RunId::new(), images = raw_images.len(), visit = report.visit_number))]
    pub fn assemble(&self, report: &ReportData, raw_images: &[RawImage]) -> Result<DocumentArtifact> {
        if raw_images.is_empty() {
            return Err(VisitaError::EmptyBatch);
        }
        if raw_images.len() > self.config.max_images_per_document {
            return Err(VisitaError::Render(format!(
                "{} evidence photos exceed the limit of {} per document",
                raw_images.len(),
                self.config.max_images_per_document
            )));
        }
        for (index, raw) in raw_images.iter().enumerate() {
            check_size(&raw.bytes, self.config.max_image_size_mb).map_err(|err| err.at_image(index))?;
        }

        let batch = self.processor.process_all(raw_images)?;
        let bytes = self.renderer.render(report, &batch.embeddable())?;
        let metrics = AggregateMetrics::from_images(&batch.metrics, bytes.len());
        let filename = derive_filename(report);

        info!(
            filename = %filename,
            pdf_bytes = metrics.document_size_bytes,
            ratio = metrics.overall_compression_ratio,
            "Report assembled"
        );
        Ok(DocumentArtifact {
            bytes,
            filename,
            metrics,
            images: batch.metrics,
        })
    }

    /// Validate sizes and estimate the document size without rendering.
    #[instrument(skip_all, fields(images = raw_sizes.len()))]
    pub fn preview(&self, report: &ReportData, raw_sizes: &[usize]) -> Result<PreviewEstimate> {
        if raw_sizes.is_empty() {
            return Err(VisitaError::EmptyBatch);
        }
        let limit_bytes = u64::from(self.config.max_image_size_mb) * 1024 * 1024;
        for (index, size) in raw_sizes.iter().enumerate() {
            if *size as u64 > limit_bytes {
                return Err(VisitaError::OversizeImage {
                    actual_bytes: *size,
                    limit_mb: self.config.max_image_size_mb,
                }
                .at_image(index));
            }
        }

        let total: usize = raw_sizes.iter().sum();
        Ok(PreviewEstimate {
            success: true,
            message: "Data validated successfully".to_string(),
            filename: format!("{}.pdf", derive_filename(report)),
            estimated_size_bytes: (total as f64 * PREVIEW_SIZE_FACTOR) as u64,
            images_count: raw_sizes.len(),
        })
    }
}

impl<R: DocumentRenderer + 'static> ReportAssembler<R> {
    /// [`assemble`](Self::assemble) on the blocking pool.
    ///
    /// Dropping the returned future abandons the result; the in-flight work
    /// finishes on its own without touching shared state.
    pub async fn assemble_async(
        self: Arc<Self>,
        report: ReportData,
        raw_images: Vec<RawImage>,
    ) -> Result<DocumentArtifact> {
        let span = info_span!("assemble_async", images = raw_images.len());
        tokio::task::spawn_blocking(move || self.assemble(&report, &raw_images))
            .instrument(span)
            .await
            .map_err(|err| VisitaError::Cancelled(err.to_string()))?
    }
}

/// Output filename (no extension) using today's local date when the report
/// has none.
pub fn derive_filename(report: &ReportData) -> String {
    let today = Local::now().format("%d-%m-%Y").to_string();
    derive_filename_with_fallback(report, &today)
}

/// `visita_obra_{visit}_{name}_{date}` with a sanitized, truncated plant name.
pub fn derive_filename_with_fallback(report: &ReportData, fallback_date: &str) -> String {
    let name: String = report
        .plant_name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_CHARS)
        .collect();
    let date = report
        .date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(fallback_date)
        .replace('/', "-");
    format!("{FILENAME_PREFIX}_{}_{name}_{date}", report.visit_number)
}
