//! Header scroll state.

/// Whether the page is scrolled past the header threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub is_past_threshold: bool,
}

impl ScrollState {
    /// Derive the state from a scroll offset. Strictly greater than the
    /// threshold; `NaN` offsets are never past it.
    #[must_use]
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        Self {
            is_past_threshold: offset > threshold,
        }
    }
}
