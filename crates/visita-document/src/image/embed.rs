// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Inline data URIs for normalized photos.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use visita_core::error::{Result, VisitaError};

/// Media type of every normalized asset.
pub const NORMALIZED_MEDIA_TYPE: &str = "image/jpeg";

const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Wrap normalized JPEG bytes as `data:image/jpeg;base64,<payload>`.
pub fn to_embeddable(normalized: &[u8]) -> String {
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + normalized.len().div_ceil(3) * 4);
    uri.push_str(DATA_URI_PREFIX);
    STANDARD.encode_string(normalized, &mut uri);
    uri
}

/// Recover the JPEG bytes from a string produced by [`to_embeddable`].
pub fn from_embeddable(uri: &str) -> Result<Vec<u8>> {
    let payload = uri.strip_prefix(DATA_URI_PREFIX).ok_or_else(|| {
        VisitaError::Render(format!(
            "embedded image must start with {DATA_URI_PREFIX:?}"
        ))
    })?;
    STANDARD
        .decode(payload)
        .map_err(|err| VisitaError::Render(format!("embedded image is not valid base64: {err}")))
}
