// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Visita — Core types, errors, configuration, and boundary validation shared
// across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod metrics;
pub mod types;
pub mod validation;

pub use config::PipelineConfig;
pub use error::VisitaError;
pub use metrics::{AggregateMetrics, ImageMetrics};
pub use types::*;
