// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Visita report pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::{AggregateMetrics, ImageMetrics};

/// Identifier for one pipeline run, used to correlate log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Image formats accepted at the upload boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageMediaType {
    Jpeg,
    Png,
    WebP,
}

impl ImageMediaType {
    /// Every accepted format, in display order.
    pub const ALL: [Self; 3] = [Self::Jpeg, Self::Png, Self::WebP];

    /// MIME type string.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }

    /// Short format name for public listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::WebP => "WebP",
        }
    }

    /// Parse a declared `Content-Type`, ignoring case and parameters.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Infer the format from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    Letter,
    Legal,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }
}

/// An undecoded evidence photo as submitted by the user.
///
/// The bytes are never modified once the image enters the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub bytes: Vec<u8>,
    /// Declared content type, e.g. `image/png`.
    pub content_type: String,
}

impl RawImage {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    /// Size of the raw upload in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Validated site-visit report fields.
///
/// Produced by [`crate::validation::ReportForm::validate`]; the pipeline
/// trusts it as-is and only reads from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportData {
    pub plant_name: String,
    pub project_id: String,
    pub location: String,
    pub internal_responsible: String,
    pub site_responsible: String,
    /// Sequential visit number, starting at 1.
    pub visit_number: u32,
    /// Zero-padded `HH:MM`.
    pub entry_time: String,
    /// Zero-padded `HH:MM`.
    pub exit_time: String,
    pub visit_reason: String,
    pub on_schedule: bool,
    /// Why progress is behind schedule; only meaningful when `on_schedule` is false.
    pub non_conformance_reason: String,
    pub agreements: String,
    /// Report date as typed by the user (usually `DD/MM/YYYY`).
    pub date: Option<String>,
    pub elaboration_place: String,
}

/// The finished report, handed to the caller for transmission.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentArtifact {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    /// File name without extension.
    pub filename: String,
    pub metrics: AggregateMetrics,
    /// Per-image metrics, in input order.
    pub images: Vec<ImageMetrics>,
}

impl DocumentArtifact {
    /// File name with the `.pdf` extension appended.
    pub fn pdf_file_name(&self) -> String {
        format!("{}.pdf", self.filename)
    }

    /// Response headers describing the artifact.
    pub fn response_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", "application/pdf".to_string()),
            (
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.pdf_file_name()),
            ),
            ("X-PDF-Size", self.metrics.document_size_bytes.to_string()),
            ("X-Images-Processed", self.metrics.images_count.to_string()),
            (
                "X-Compression-Ratio",
                self.metrics.overall_compression_ratio.to_string(),
            ),
        ]
    }
}

/// Result of a preview run: validation plus a size estimate, no rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewEstimate {
    pub success: bool,
    pub message: String,
    /// File name including the `.pdf` extension.
    pub filename: String,
    pub estimated_size_bytes: u64,
    pub images_count: usize,
}

/// Public, read-only view of the service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub max_image_width: u32,
    pub image_quality: u8,
    pub max_image_size_mb: u32,
    pub supported_formats: Vec<String>,
}

impl From<&crate::PipelineConfig> for ServiceInfo {
    fn from(config: &crate::PipelineConfig) -> Self {
        Self {
            max_image_width: config.max_image_width,
            image_quality: config.image_quality,
            max_image_size_mb: config.max_image_size_mb,
            supported_formats: ImageMediaType::ALL
                .iter()
                .map(|t| t.label().to_string())
                .collect(),
        }
    }
}
