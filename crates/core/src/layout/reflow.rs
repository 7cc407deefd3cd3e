//! Line-to-paragraph reconstruction.
//!
//! Contains reconstruct_paragraphs() for turning a flat recognition result
//! into paragraph-structured prose, using vertical line spacing to locate
//! paragraph breaks.

use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use tracing::debug;

use super::params::ReflowParams;
use crate::recognize::RecognizedLine;

/// Reconstructs paragraph-structured text from recognized lines.
///
/// Lines arrive in arbitrary order. They are first put into reading order
/// by sorting on `min_y` descending (origin bottom-left, so a larger value
/// is higher on the page). The gap before each line is then compared
/// against a threshold derived from the median gap: spacing near the median
/// is normal leading within a paragraph, while a gap above
/// `median * gap_ratio` marks a paragraph break.
///
/// Lines within a paragraph are joined with a single space; paragraphs are
/// separated by a blank line. Whitespace-only lines are dropped and never
/// open, close, or pad a paragraph. When no usable threshold exists (fewer
/// than two lines, or all gaps zero) the whole result is a single
/// paragraph.
///
/// The sort is stable, so lines sharing a `min_y` keep their input order.
/// This function is pure: no I/O, no hidden state, deterministic output.
pub fn reconstruct_paragraphs(lines: &[RecognizedLine], params: &ReflowParams) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let sorted = reading_order(lines);
    let gaps = line_gaps(&sorted);

    let Some(threshold) = paragraph_gap_threshold(&gaps, params.gap_ratio) else {
        return join_single_paragraph(&sorted);
    };
    debug!(threshold, lines = sorted.len(), "paragraph gap threshold");

    let mut paragraphs: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    let first = sorted[0].text.trim();
    if !first.is_empty() {
        current.push(first);
    }

    for (index, line) in sorted.iter().enumerate().skip(1) {
        let trimmed = line.text.trim();
        if trimmed.is_empty() {
            continue;
        }

        // The gap is measured against the previous line in reading order,
        // not the previous non-empty one.
        if gaps[index - 1] > threshold && !current.is_empty() {
            paragraphs.push(std::mem::take(&mut current));
        }
        current.push(trimmed);
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
        .iter()
        .map(|paragraph| paragraph.join(" "))
        .join("\n\n")
}

/// Sorts lines into reading order: `min_y` descending, stable on ties.
pub fn reading_order(lines: &[RecognizedLine]) -> Vec<&RecognizedLine> {
    let mut sorted: Vec<&RecognizedLine> = lines.iter().collect();
    sorted.sort_by_key(|line| Reverse(OrderedFloat(line.min_y)));
    sorted
}

/// Vertical gap before each line except the first, in reading order.
///
/// Clamped at zero: overlapping or imprecisely placed lines must not
/// produce negative gaps that would skew the median.
pub fn line_gaps(sorted: &[&RecognizedLine]) -> Vec<f64> {
    sorted
        .iter()
        .tuple_windows()
        .map(|(prev, cur)| (prev.min_y - cur.min_y).max(0.0))
        .collect()
}

/// Derives the paragraph gap threshold from the gap list.
///
/// Returns None when there is no usable signal: no gaps at all, or a zero
/// median (degenerate spacing where splitting would only fragment the
/// text). Callers fall back to a single-paragraph join.
pub fn paragraph_gap_threshold(gaps: &[f64], gap_ratio: f64) -> Option<f64> {
    if gaps.is_empty() {
        return None;
    }

    let median = median(gaps);
    if median <= 0.0 {
        return None;
    }

    Some(median * gap_ratio)
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by_key(|v| OrderedFloat(*v));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn join_single_paragraph(sorted: &[&RecognizedLine]) -> String {
    sorted
        .iter()
        .map(|line| line.text.trim())
        .filter(|text| !text.is_empty())
        .join(" ")
}
