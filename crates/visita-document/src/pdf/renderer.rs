// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The document-rendering capability consumed by the report assembler.

use visita_core::ReportData;
use visita_core::error::Result;

/// Lays out a report and its evidence photos as one binary document.
///
/// `images` are inline `data:image/jpeg;base64,...` URIs in slot order.
/// Identical inputs must produce identical visible content; container
/// details such as document ids may differ between calls.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, report: &ReportData, images: &[String]) -> Result<Vec<u8>>;
}

impl<R: DocumentRenderer + ?Sized> DocumentRenderer for std::sync::Arc<R> {
    fn render(&self, report: &ReportData, images: &[String]) -> Result<Vec<u8>> {
        (**self).render(report, images)
    }
}

impl<R: DocumentRenderer + ?Sized> DocumentRenderer for Box<R> {
    fn render(&self, report: &ReportData, images: &[String]) -> Result<Vec<u8>> {
        (**self).render(report, images)
    }
}
