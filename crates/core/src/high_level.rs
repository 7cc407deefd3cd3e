//! High-level text reconstruction API.
//!
//! Provides the main public entry points:
//! - `extract_text()` - Reconstruct paragraph text from a recognition dump
//! - `extract_text_from_lines()` - Same, from already-parsed lines

use crate::error::Result;
use crate::layout::{ReflowParams, reconstruct_paragraphs};
use crate::recognize::{RecognizedLine, lines_from_json};

/// Reconstructs paragraph text from a recognition dump.
///
/// # Arguments
/// * `data` - JSON recognition dump (array of `{"text", "min_y"}` objects)
/// * `params` - Reflow parameters (None for defaults)
///
/// # Returns
/// The paragraph-joined text: lines joined with spaces, paragraphs
/// separated by blank lines.
///
/// # Example
/// ```ignore
/// use passage_core::high_level::extract_text;
///
/// let dump = std::fs::read("page.lines.json")?;
/// let text = extract_text(&dump, None)?;
/// ```
pub fn extract_text(data: &[u8], params: Option<ReflowParams>) -> Result<String> {
    let lines = lines_from_json(data)?;
    Ok(extract_text_from_lines(&lines, params.as_ref()))
}

/// Reconstructs paragraph text from already-parsed recognized lines.
pub fn extract_text_from_lines(
    lines: &[RecognizedLine],
    params: Option<&ReflowParams>,
) -> String {
    let default_params;
    let params = match params {
        Some(p) => p,
        None => {
            default_params = ReflowParams::default();
            &default_params
        }
    };

    reconstruct_paragraphs(lines, params)
}
