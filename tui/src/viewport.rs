//! Terminal implementation of [`ViewportHost`].
//!
//! The page is laid out in rows; controllers see page pixels. One row is
//! `row_height_px` pixels tall.

use std::{cell::RefCell, time::Duration};

use frontpage_core::{
    IntersectionCallback, Listeners, ScrollCallback, Subscription, ViewportHost, VisibilityTracker,
    VisibilityWatch,
};
use frontpage_types::{
    IntersectionEntry, IntersectionOptions, ScrollBehavior, SectionId, ViewportRect,
    ui::{EffectTimer, ease_in_out_cubic},
};
use tracing::debug;

use crate::layout::PageLayout;

/// Offsets closer than this are the same position.
const OFFSET_EPSILON: f64 = 0.01;

#[derive(Debug, Clone)]
struct ScrollAnimation {
    from: f64,
    to: f64,
    timer: EffectTimer,
}

impl ScrollAnimation {
    fn position(&self) -> f64 {
        let eased = f64::from(ease_in_out_cubic(self.timer.progress()));
        self.from + (self.to - self.from) * eased
    }
}

#[derive(Debug)]
struct ViewportState {
    layout: PageLayout,
    offset: f64,
    animation: Option<ScrollAnimation>,
}

/// Scrollable view over a [`PageLayout`].
///
/// Scroll listeners and intersection callbacks run synchronously from
/// whichever call moved the viewport. No internal borrow is held while they
/// run, so they may read the viewport back.
pub struct TerminalViewport {
    state: RefCell<ViewportState>,
    scroll: Listeners<f64>,
    tracker: VisibilityTracker,
    row_height_px: f64,
    smooth_scroll: Duration,
}

impl TerminalViewport {
    #[must_use]
    pub fn new(layout: PageLayout, row_height_px: f64, smooth_scroll: Duration) -> Self {
        Self {
            state: RefCell::new(ViewportState {
                layout,
                offset: 0.0,
                animation: None,
            }),
            scroll: Listeners::new(),
            tracker: VisibilityTracker::new(),
            row_height_px,
            smooth_scroll,
        }
    }

    /// Swap in a layout measured for a new terminal size.
    ///
    /// The offset is clamped to the new range and intersections are
    /// re-evaluated even if the offset did not move.
    pub fn set_layout(&self, layout: PageLayout) {
        let clamped = {
            let mut state = self.state.borrow_mut();
            state.layout = layout;
            let max = self.max_offset_for(&state.layout);
            if let Some(animation) = state.animation.as_mut() {
                animation.to = animation.to.clamp(0.0, max);
            }
            state.offset.clamp(0.0, max)
        };
        debug!(offset = clamped, "Viewport relayout");
        if !self.move_to(clamped) {
            self.evaluate();
        }
    }

    /// Manual scroll by whole rows. Cancels any running smooth scroll.
    pub fn scroll_by(&self, rows: i32) {
        self.cancel_animation();
        let target = self.offset() + f64::from(rows) * self.row_height_px;
        self.move_to(self.clamp(target));
    }

    /// Scroll to a page-pixel offset, clamped to the scrollable range.
    pub fn scroll_to(&self, offset: f64, behavior: ScrollBehavior) {
        let target = self.clamp(offset);
        let from = self.offset();
        if behavior == ScrollBehavior::Instant || self.smooth_scroll.is_zero() {
            self.cancel_animation();
            self.move_to(target);
            return;
        }
        if (target - from).abs() < OFFSET_EPSILON {
            self.cancel_animation();
            return;
        }
        debug!(from, to = target, "Smooth scroll started");
        self.state.borrow_mut().animation = Some(ScrollAnimation {
            from,
            to: target,
            timer: EffectTimer::new(self.smooth_scroll),
        });
    }

    pub fn scroll_to_top(&self) {
        self.scroll_to(0.0, ScrollBehavior::Instant);
    }

    pub fn scroll_to_bottom(&self) {
        self.scroll_to(self.max_offset(), ScrollBehavior::Instant);
    }

    /// Advance a running smooth scroll.
    pub fn tick(&self, delta: Duration) {
        let next = {
            let mut state = self.state.borrow_mut();
            let Some(animation) = state.animation.as_mut() else {
                return;
            };
            animation.timer.advance(delta);
            if animation.timer.is_finished() {
                let to = animation.to;
                state.animation = None;
                to
            } else {
                animation.position()
            }
        };
        self.move_to(next);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.borrow().animation.is_some()
    }

    /// Current offset in page pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.state.borrow().offset
    }

    /// First visible page row.
    #[must_use]
    pub fn offset_rows(&self) -> u32 {
        (self.offset() / self.row_height_px).round() as u32
    }

    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.max_offset_for(&self.state.borrow().layout)
    }

    #[must_use]
    pub fn layout(&self) -> PageLayout {
        self.state.borrow().layout.clone()
    }

    fn max_offset_for(&self, layout: &PageLayout) -> f64 {
        f64::from(layout.max_scroll_rows()) * self.row_height_px
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }

    fn cancel_animation(&self) {
        if self.state.borrow_mut().animation.take().is_some() {
            debug!("Smooth scroll cancelled");
        }
    }

    /// Returns whether the offset moved. Listeners hear only real moves.
    fn move_to(&self, offset: f64) -> bool {
        {
            let mut state = self.state.borrow_mut();
            if (state.offset - offset).abs() < OFFSET_EPSILON {
                return false;
            }
            state.offset = offset;
        }
        self.scroll.emit(&offset);
        self.evaluate();
        true
    }

    fn evaluate(&self) {
        let (viewport, layout) = {
            let state = self.state.borrow();
            let viewport = ViewportRect::new(
                state.offset,
                f64::from(state.layout.viewport_rows()) * self.row_height_px,
            );
            (viewport, state.layout.clone())
        };
        let row_height_px = self.row_height_px;
        self.tracker.evaluate(|target, margin| {
            layout.section(target).map(|rows| {
                IntersectionEntry::measure(target, rows.rect(row_height_px), viewport, margin)
            })
        });
    }
}

impl ViewportHost for TerminalViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset()
    }

    fn observe_scroll(&self, callback: ScrollCallback) -> Subscription {
        let callback = RefCell::new(callback);
        self.scroll.subscribe(move |offset| {
            if let Ok(mut callback) = callback.try_borrow_mut() {
                callback(*offset);
            }
        })
    }

    fn observe_visibility(
        &self,
        targets: &[SectionId],
        options: IntersectionOptions,
        callback: IntersectionCallback,
    ) -> VisibilityWatch {
        let layout = self.layout();
        let watch = self
            .tracker
            .watch(targets, options, callback, |id| layout.section(id).is_some());
        self.evaluate();
        watch
    }

    fn scroll_element_into_view(&self, target: SectionId, behavior: ScrollBehavior) -> bool {
        let Some(rows) = self.layout().section(target) else {
            return false;
        };
        self.scroll_to(rows.rect(self.row_height_px).top, behavior);
        true
    }
}
