// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Visita.

use thiserror::Error;

/// Top-level error type for all Visita operations.
#[derive(Debug, Error)]
pub enum VisitaError {
    // -- Image errors --
    #[error("image could not be decoded: {0}")]
    Decode(String),

    #[error("unsupported color model: {0}")]
    UnsupportedColorModel(String),

    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("image is {actual_bytes} bytes, exceeding the {limit_mb} MB limit")]
    OversizeImage { actual_bytes: usize, limit_mb: u32 },

    // -- Batch errors --
    #[error("no images were supplied")]
    EmptyBatch,

    /// A single image failed; `index` is zero-based, the message is 1-based.
    #[error("image {} failed: {source}", .index + 1)]
    ImageFailed {
        index: usize,
        #[source]
        source: Box<VisitaError>,
    },

    #[error("worker pool could not be started: {0}")]
    WorkerPool(String),

    #[error("report assembly was cancelled: {0}")]
    Cancelled(String),

    // -- Document errors --
    #[error("document rendering failed: {0}")]
    Render(String),

    // -- Input errors (raised at the boundary, never inside the pipeline) --
    #[error("invalid report data: {0}")]
    InvalidReportData(String),

    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // -- I/O --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VisitaError {
    /// Attach the zero-based batch position of the image that produced `self`.
    pub fn at_image(self, index: usize) -> Self {
        Self::ImageFailed {
            index,
            source: Box::new(self),
        }
    }

    /// 1-based position of the failing image, if this error came from one.
    pub fn image_position(&self) -> Option<usize> {
        match self {
            Self::ImageFailed { index, .. } => Some(index + 1),
            _ => None,
        }
    }

    /// The underlying cause, looking through the per-image wrapper.
    pub fn root(&self) -> &VisitaError {
        match self {
            Self::ImageFailed { source, .. } => source.root(),
            other => other,
        }
    }

    /// Stable snake_case tag for log fields and metric labels.
    pub fn code(&self) -> &'static str {
        match self.root() {
            Self::Decode(_) => "decode_error",
            Self::UnsupportedColorModel(_) => "unsupported_color_model",
            Self::Encode(_) => "encode_error",
            Self::OversizeImage { .. } => "oversize_image",
            Self::EmptyBatch => "empty_batch",
            Self::WorkerPool(_) => "worker_pool",
            Self::Cancelled(_) => "cancelled",
            Self::Render(_) => "render_error",
            Self::InvalidReportData(_) => "invalid_report_data",
            Self::InvalidUpload(_) => "invalid_upload",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            // root() never returns the wrapper.
            Self::ImageFailed { .. } => "image_failed",
        }
    }

    /// Whether the fault lies with the submitted input rather than the
    /// pipeline itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.root(),
            Self::Decode(_)
                | Self::UnsupportedColorModel(_)
                | Self::OversizeImage { .. }
                | Self::EmptyBatch
                | Self::InvalidReportData(_)
                | Self::InvalidUpload(_)
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, VisitaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_failure_reports_one_based_position() {
        let err = VisitaError::Decode("not an image".into()).at_image(2);
        assert_eq!(err.image_position(), Some(3));
        assert_eq!(err.to_string(), "image 3 failed: image could not be decoded: not an image");
    }

    #[test]
    fn code_looks_through_wrapper() {
        let err = VisitaError::OversizeImage {
            actual_bytes: 20 * 1024 * 1024,
            limit_mb: 10,
        }
        .at_image(0);
        assert_eq!(err.code(), "oversize_image");
        assert!(err.is_input_error());
    }

    #[test]
    fn render_error_is_not_input_error() {
        let err = VisitaError::Render("layout failed".into());
        assert_eq!(err.code(), "render_error");
        assert!(!err.is_input_error());
        assert_eq!(err.image_position(), None);
    }
}
