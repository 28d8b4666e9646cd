// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware output directory resolution.

use std::path::{Path, PathBuf};

/// Return the default directory for generated reports, creating it if needed.
pub fn reports_dir() -> std::io::Result<PathBuf> {
    let dir = resolve_reports_dir(|key| std::env::var(key).ok());
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Use `explicit` when given, otherwise the default reports directory.
pub fn output_dir(explicit: Option<&Path>) -> std::io::Result<PathBuf> {
    match explicit {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Ok(dir.to_path_buf())
        }
        None => reports_dir(),
    }
}

fn resolve_reports_dir(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    // XDG data dir, then home, then the working directory
    let base = if let Some(xdg) = lookup("XDG_DATA_HOME") {
        PathBuf::from(xdg)
    } else if let Some(home) = lookup("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from(".")
    };
    base.join("visita").join("reports")
}
