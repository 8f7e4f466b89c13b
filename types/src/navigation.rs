use crate::SectionId;

/// Outcome of a navigation request.
///
/// `NotFound` is a soft condition: stale links are expected and callers
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationResult {
    Navigated(SectionId),
    NotFound,
}

impl NavigationResult {
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, NavigationResult::Navigated(_))
    }
}

/// How the host repositions the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated transition, handled by the host.
    #[default]
    Smooth,
    Instant,
}
