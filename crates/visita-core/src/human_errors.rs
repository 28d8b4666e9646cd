// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the people filling in visit reports.
//
// Every technical error is mapped to a plain message, a suggestion, and the
// status code the boundary should answer with.

use crate::error::VisitaError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user must change what they submitted.
    ActionRequired,
    /// Something went wrong on our side; submitting again may help.
    Internal,
}

/// A human-readable error with a plain message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// HTTP-style status for the response (400, 413, 500, ...).
    pub status: u16,
    pub severity: Severity,
}

/// Convert a `VisitaError` into a `HumanError`, naming the offending photo
/// by its 1-based position when there is one.
pub fn humanize_error(err: &VisitaError) -> HumanError {
    let photo = match err.image_position() {
        Some(position) => format!("Photo {position}"),
        None => "A photo".to_string(),
    };

    match err.root() {
        // -- Image errors --
        VisitaError::Decode(_) => HumanError {
            message: format!("{photo} could not be read."),
            suggestion: "The file may be damaged or not really an image. Save it again as JPEG, PNG, or WebP and retry.".into(),
            status: 400,
            severity: Severity::ActionRequired,
        },

        VisitaError::UnsupportedColorModel(detail) => HumanError {
            message: format!("{photo} uses colors we can't convert."),
            suggestion: format!("Export the photo as a regular RGB JPEG and retry. ({detail})"),
            status: 400,
            severity: Severity::ActionRequired,
        },

        VisitaError::Encode(_) => HumanError {
            message: format!("{photo} could not be compressed."),
            suggestion: "Very large or unusually shaped photos can fail. Try cropping or resizing it first.".into(),
            status: 500,
            severity: Severity::Internal,
        },

        VisitaError::OversizeImage { limit_mb, .. } => HumanError {
            message: format!("{photo} is larger than {limit_mb} MB."),
            suggestion: "Reduce the photo's resolution or quality on your device, then attach it again.".into(),
            status: 413,
            severity: Severity::ActionRequired,
        },

        // -- Batch errors --
        VisitaError::EmptyBatch => HumanError {
            message: "No photos were attached.".into(),
            suggestion: "Attach at least one evidence photo to the report.".into(),
            status: 400,
            severity: Severity::ActionRequired,
        },

        VisitaError::WorkerPool(_) | VisitaError::Cancelled(_) => HumanError {
            message: "The report could not be generated right now.".into(),
            suggestion: "Please submit the report again in a moment.".into(),
            status: 503,
            severity: Severity::Internal,
        },

        // -- Document errors --
        VisitaError::Render(detail) => HumanError {
            message: "The PDF could not be built.".into(),
            suggestion: format!("Check the report fields and the number of photos, then try again. ({detail})"),
            status: 500,
            severity: Severity::Internal,
        },

        // -- Input errors --
        VisitaError::InvalidReportData(detail) => HumanError {
            message: "Some report fields are not valid.".into(),
            suggestion: detail.clone(),
            status: 400,
            severity: Severity::ActionRequired,
        },

        VisitaError::InvalidUpload(detail) => HumanError {
            message: "One of the attached files is not accepted.".into(),
            suggestion: detail.clone(),
            status: 400,
            severity: Severity::ActionRequired,
        },

        VisitaError::InvalidConfig(_) => HumanError {
            message: "The report service is misconfigured.".into(),
            suggestion: "Contact the administrator; no report can be generated until this is fixed.".into(),
            status: 500,
            severity: Severity::Internal,
        },

        // -- I/O --
        VisitaError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => HumanError {
            message: "A file couldn't be found.".into(),
            suggestion: "It may have been moved or deleted. Choose the file again.".into(),
            status: 400,
            severity: Severity::ActionRequired,
        },

        VisitaError::Io(_) | VisitaError::Serialization(_) => HumanError {
            message: "There was an internal problem generating the report.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            status: 500,
            severity: Severity::Internal,
        },

        VisitaError::ImageFailed { .. } => HumanError {
            message: format!("{photo} could not be processed."),
            suggestion: "Try attaching the photo again.".into(),
            status: 500,
            severity: Severity::Internal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failure_names_the_photo() {
        let err = VisitaError::Decode("bad magic".into()).at_image(4);
        let human = humanize_error(&err);
        assert_eq!(human.message, "Photo 5 could not be read.");
        assert_eq!(human.status, 400);
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn oversize_maps_to_413() {
        let err = VisitaError::OversizeImage {
            actual_bytes: 11 * 1024 * 1024,
            limit_mb: 10,
        }
        .at_image(0);
        let human = humanize_error(&err);
        assert_eq!(human.status, 413);
        assert!(human.message.contains("Photo 1"));
        assert!(human.message.contains("10 MB"));
    }

    #[test]
    fn empty_batch_is_action_required() {
        let human = humanize_error(&VisitaError::EmptyBatch);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert_eq!(human.status, 400);
    }

    #[test]
    fn render_failure_is_internal() {
        let human = humanize_error(&VisitaError::Render("too many images".into()));
        assert_eq!(human.severity, Severity::Internal);
        assert_eq!(human.status, 500);
    }
}
