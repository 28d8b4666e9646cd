// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline configuration.
//
// Read-only once built: callers construct a `PipelineConfig` at startup and
// hand it to each pipeline instance explicitly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VisitaError};

/// Settings shared by every report assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Images wider than this are scaled down to it (pixels).
    pub max_image_width: u32,
    /// JPEG quality used when re-encoding evidence photos (1-100).
    pub image_quality: u8,
    /// Per-image ceiling on the raw upload size, in megabytes.
    pub max_image_size_mb: u32,
    /// Upper bound on evidence slots a single document may hold.
    pub max_images_per_document: usize,
    /// Normalization workers; `None` uses the available parallelism.
    pub worker_threads: Option<usize>,
    /// Page size for the rendered report.
    pub paper_size: crate::PaperSize,
    /// Resolution at which evidence photos are placed on the page.
    pub pdf_dpi: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_image_width: 800,
            image_quality: 85,
            max_image_size_mb: 10,
            max_images_per_document: 200,
            worker_threads: None,
            paper_size: crate::PaperSize::A4,
            pdf_dpi: 96.0,
        }
    }
}

impl PipelineConfig {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.max_image_width == 0 {
            return Err(VisitaError::InvalidConfig(
                "max_image_width must be greater than 0".into(),
            ));
        }
        if !(1..=100).contains(&self.image_quality) {
            return Err(VisitaError::InvalidConfig(format!(
                "image_quality must be between 1 and 100, got {}",
                self.image_quality
            )));
        }
        if self.max_image_size_mb == 0 {
            return Err(VisitaError::InvalidConfig(
                "max_image_size_mb must be greater than 0".into(),
            ));
        }
        if self.max_images_per_document == 0 {
            return Err(VisitaError::InvalidConfig(
                "max_images_per_document must be greater than 0".into(),
            ));
        }
        if self.worker_threads == Some(0) {
            return Err(VisitaError::InvalidConfig(
                "worker_threads must be greater than 0 when set".into(),
            ));
        }
        if !(self.pdf_dpi.is_finite() && self.pdf_dpi > 0.0) {
            return Err(VisitaError::InvalidConfig(format!(
                "pdf_dpi must be a positive number, got {}",
                self.pdf_dpi
            )));
        }
        Ok(())
    }

    /// Load a JSON config file. Missing keys fall back to their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(v) = lookup("MAX_IMAGE_WIDTH") {
            self.max_image_width = parse_var("MAX_IMAGE_WIDTH", &v)?;
        }
        if let Some(v) = lookup("IMAGE_QUALITY") {
            self.image_quality = parse_var("IMAGE_QUALITY", &v)?;
        }
        if let Some(v) = lookup("MAX_IMAGE_SIZE_MB") {
            self.max_image_size_mb = parse_var("MAX_IMAGE_SIZE_MB", &v)?;
        }
        if let Some(v) = lookup("MAX_IMAGES_PER_DOCUMENT") {
            self.max_images_per_document = parse_var("MAX_IMAGES_PER_DOCUMENT", &v)?;
        }
        if let Some(v) = lookup("WORKER_THREADS") {
            self.worker_threads = Some(parse_var("WORKER_THREADS", &v)?);
        }
        if let Some(v) = lookup("PDF_DPI") {
            self.pdf_dpi = parse_var("PDF_DPI", &v)?;
        }
        self.validate()?;
        Ok(self)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| VisitaError::InvalidConfig(format!("{key}={value:?} is not a valid value")))
}
