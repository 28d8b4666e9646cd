// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — the rendering seam and its lopdf implementation.

pub mod renderer;
pub mod writer;

pub use renderer::DocumentRenderer;
pub use writer::PdfReportWriter;
