// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// visita-document — Evidence photo normalization and PDF report assembly.
//
// Provides image normalization (decode, flatten, bound width, re-encode as
// JPEG), ordered parallel batch processing, inline embedding, a lopdf
// report renderer, and the assembler that ties them together.

pub mod assemble;
pub mod image;
pub mod pdf;

// Re-export the primary structs so callers can use `visita_document::ReportAssembler` etc.
pub use assemble::{ReportAssembler, derive_filename};
pub use image::batch::{BatchImageProcessor, NormalizedAsset, ProcessedBatch};
pub use image::normalizer::{ImageNormalizer, NormalizeSettings, normalize};
pub use pdf::renderer::DocumentRenderer;
pub use pdf::writer::PdfReportWriter;
