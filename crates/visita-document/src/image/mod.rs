// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — normalization, batch processing, and inline embedding.

pub mod batch;
pub mod embed;
pub mod normalizer;

pub use batch::BatchImageProcessor;
pub use normalizer::ImageNormalizer;
