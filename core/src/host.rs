//! The seam between the page controllers and whatever renders the page.
//!
//! A host owns scroll position, element geometry and scroll animation. The
//! controllers only ever talk to it through [`ViewportHost`], so tests can
//! substitute a double.

use frontpage_types::{IntersectionEntry, IntersectionOptions, ScrollBehavior, SectionId};

use crate::state::Subscription;

/// Receives the current scroll offset in page pixels.
pub type ScrollCallback = Box<dyn FnMut(f64)>;

/// Receives one intersection entry and decides whether to keep watching the
/// target.
pub type IntersectionCallback = Box<dyn FnMut(&IntersectionEntry) -> WatchControl>;

/// Returned from an [`IntersectionCallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchControl {
    Keep,
    /// Stop watching this target; the host must not report it again.
    Release,
}

/// Result of [`ViewportHost::observe_visibility`].
#[derive(Debug)]
pub struct VisibilityWatch {
    /// Targets the host found and is now watching.
    pub observed: Vec<SectionId>,
    /// Targets with no element in the host; they are never reported.
    pub missing: Vec<SectionId>,
    /// Dropping this disconnects the whole watch.
    pub subscription: Subscription,
}

/// Capabilities the controllers need from the viewport environment.
///
/// All calls happen on the UI thread. Implementations must not hold internal
/// borrows while invoking callbacks.
pub trait ViewportHost {
    /// Current scroll offset in page pixels.
    fn scroll_offset(&self) -> f64;

    /// Report every scroll position change until the subscription is dropped.
    fn observe_scroll(&self, callback: ScrollCallback) -> Subscription;

    /// Watch `targets` against the viewport.
    ///
    /// The host reports an entry for every observed target once right after
    /// observation starts (so already-visible targets are not skipped) and
    /// again whenever the target crosses `options.threshold` in either
    /// direction.
    fn observe_visibility(
        &self,
        targets: &[SectionId],
        options: IntersectionOptions,
        callback: IntersectionCallback,
    ) -> VisibilityWatch;

    /// Bring the target's top to the top of the viewport.
    ///
    /// Returns `false` when the target has no element. Smooth transitions run
    /// asynchronously in the host; nothing waits for them.
    fn scroll_element_into_view(&self, target: SectionId, behavior: ScrollBehavior) -> bool;
}
