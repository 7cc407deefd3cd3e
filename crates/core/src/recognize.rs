//! Boundary types for the platform text-recognition service.
//!
//! Recognition itself is an external black box: some OCR engine runs over a
//! page image and emits one entry per recognized line. That completed output
//! crosses into this library as a JSON dump, an array of
//! `{"text": ..., "min_y": ...}` objects in recognition order (which is not
//! reading order; see [`crate::layout::reconstruct_paragraphs`]).

use serde::{Deserialize, Serialize};

use crate::error::{PassageError, Result};

/// A single recognized line of text together with its vertical position.
///
/// Positions use the recognition service's coordinate space: origin at the
/// bottom-left of the page, so a *larger* `min_y` means the line sits
/// *higher* on the page. Only relative ordering and relative gap magnitudes
/// matter downstream; the absolute scale (typically normalized 0.0-1.0) is
/// irrelevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedLine {
    /// Raw recognized content for one line.
    pub text: String,

    /// Bottom edge of the line's bounding box along the page's vertical axis.
    pub min_y: f64,
}

impl RecognizedLine {
    /// Creates a recognized line from its parts.
    pub fn new(text: impl Into<String>, min_y: f64) -> Self {
        Self {
            text: text.into(),
            min_y,
        }
    }
}

/// Parses a recognition dump.
///
/// The dump is a JSON array of `{"text", "min_y"}` objects. Input that is
/// not valid JSON, or valid JSON of the wrong shape, is a
/// [`PassageError::DecodeError`].
pub fn lines_from_json(data: &[u8]) -> Result<Vec<RecognizedLine>> {
    serde_json::from_slice(data)
        .map_err(|e| PassageError::DecodeError(format!("recognition dump: {}", e)))
}

/// Serializes lines back into dump form, pretty-printed.
pub fn lines_to_json(lines: &[RecognizedLine]) -> Result<String> {
    Ok(serde_json::to_string_pretty(lines)?)
}
