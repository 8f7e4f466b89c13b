//! Header threshold tracking.

use frontpage_types::{HEADER_THRESHOLD_PX, ui::ScrollState};
use tracing::debug;

use crate::state::{Store, Subscription};

/// Derives [`ScrollState`] from scroll offsets.
///
/// Listeners hear about a new state only when `is_past_threshold` flips.
#[derive(Debug, Clone)]
pub struct ScrollPositionMonitor {
    threshold_px: f64,
    state: Store<ScrollState>,
}

impl ScrollPositionMonitor {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            state: Store::new(ScrollState::default()),
        }
    }

    pub fn on_scroll_event(&self, offset: f64) -> ScrollState {
        let next = ScrollState::from_offset(offset, self.threshold_px);
        if self.state.set(next) {
            debug!(
                offset,
                past_threshold = next.is_past_threshold,
                "Header scroll state changed"
            );
        }
        next
    }

    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&ScrollState) + 'static) -> Subscription {
        self.state.subscribe(listener)
    }
}

impl Default for ScrollPositionMonitor {
    fn default() -> Self {
        Self::new(HEADER_THRESHOLD_PX)
    }
}
