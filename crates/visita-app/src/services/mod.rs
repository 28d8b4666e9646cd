// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Services — config loading, upload intake, and report generation for the CLI.

pub mod data_dir;
pub mod report_service;
