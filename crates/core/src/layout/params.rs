//! Reflow parameters.
//!
//! Contains ReflowParams for controlling paragraph reconstruction.

/// Parameters for paragraph reconstruction.
///
/// Controls how recognized lines are grouped into paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflowParams {
    /// A gap between two consecutive lines larger than this multiple of the
    /// median line gap is treated as a paragraph break. Normal line spacing
    /// clusters tightly around the median while paragraph breaks sit well
    /// above it; values between 1.4 and 1.8 work well for book-like layouts.
    pub gap_ratio: f64,
}

impl Default for ReflowParams {
    fn default() -> Self {
        Self { gap_ratio: 1.6 }
    }
}

impl ReflowParams {
    /// Creates new reflow parameters with the specified values.
    ///
    /// # Panics
    /// Panics if gap_ratio is not a finite number greater than zero.
    pub fn new(gap_ratio: f64) -> Self {
        assert!(
            gap_ratio.is_finite() && gap_ratio > 0.0,
            "gap_ratio should be a finite number greater than zero"
        );

        Self { gap_ratio }
    }
}
