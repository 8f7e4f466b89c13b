//! Controller tuning knobs.

use crate::{IntersectionOptions, ScrollBehavior};

/// Scroll offset past which the header switches to its solid style.
pub const HEADER_THRESHOLD_PX: f64 = 50.0;
/// Fraction of a section that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Negative bottom margin so reveals fire slightly before the screen bottom.
pub const REVEAL_ROOT_MARGIN_BOTTOM_PX: f64 = -50.0;

/// Settings shared by the page controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub header_threshold_px: f64,
    pub reveal: IntersectionOptions,
    pub scroll_behavior: ScrollBehavior,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            header_threshold_px: HEADER_THRESHOLD_PX,
            reveal: IntersectionOptions::default(),
            scroll_behavior: ScrollBehavior::Smooth,
        }
    }
}
