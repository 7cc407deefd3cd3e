//! Layout analysis over recognized lines.
//!
//! The only layout signal available after recognition is each line's
//! vertical position, so analysis here is one-dimensional: order the lines,
//! then split them into paragraphs where the spacing jumps.

pub mod params;
pub mod reflow;

pub use params::ReflowParams;
pub use reflow::{line_gaps, paragraph_gap_threshold, reading_order, reconstruct_paragraphs};
