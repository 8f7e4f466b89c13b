//! Vertical page geometry and viewport intersection.
//!
//! All values are page pixels measured from the top of the document. The page
//! is a single full-width column, so only the vertical axis matters.

use crate::SectionId;

/// Position of an element in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The visible region of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub top: f64,
    pub height: f64,
}

impl ViewportRect {
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Grow (positive) or shrink (negative) the region by a root margin.
    #[must_use]
    pub fn with_margin(self, margin: RootMargin) -> Self {
        let top = self.top - margin.top;
        let bottom = self.bottom() + margin.bottom;
        Self {
            top,
            height: (bottom - top).max(0.0),
        }
    }
}

/// Offsets applied to the viewport before testing intersection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f64,
    pub bottom: f64,
}

impl RootMargin {
    #[must_use]
    pub const fn bottom(bottom: f64) -> Self {
        Self { top: 0.0, bottom }
    }
}

/// When an element counts as "in view".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionOptions {
    /// Fraction of the element's area that must be visible, in `(0, 1]`.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl IntersectionOptions {
    #[must_use]
    pub fn is_satisfied_by(&self, entry: &IntersectionEntry) -> bool {
        entry.is_intersecting && entry.intersection_ratio >= self.threshold
    }
}

impl Default for IntersectionOptions {
    fn default() -> Self {
        Self {
            threshold: crate::REVEAL_THRESHOLD,
            root_margin: RootMargin::bottom(crate::REVEAL_ROOT_MARGIN_BOTTOM_PX),
        }
    }
}

/// One observation of a target against the (margin-adjusted) viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: SectionId,
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    #[must_use]
    pub fn measure(
        target: SectionId,
        rect: ElementRect,
        viewport: ViewportRect,
        margin: RootMargin,
    ) -> Self {
        let root = viewport.with_margin(margin);
        Self {
            target,
            intersection_ratio: intersection_ratio(rect, root),
            is_intersecting: intersects(rect, root),
        }
    }
}

/// Edge-adjacent rectangles intersect, matching browser semantics.
#[must_use]
pub fn intersects(rect: ElementRect, root: ViewportRect) -> bool {
    root.height > 0.0 && rect.top <= root.bottom() && rect.bottom() >= root.top
}

/// Visible fraction of `rect` inside `root`, clamped to `[0, 1]`.
///
/// Zero-height elements are fully visible when they intersect at all.
#[must_use]
pub fn intersection_ratio(rect: ElementRect, root: ViewportRect) -> f64 {
    if !intersects(rect, root) {
        return 0.0;
    }
    if rect.height <= 0.0 {
        return 1.0;
    }
    let visible = rect.bottom().min(root.bottom()) - rect.top.max(root.top);
    (visible / rect.height).clamp(0.0, 1.0)
}
