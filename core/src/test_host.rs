//! In-memory [`ViewportHost`] for controller tests.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use frontpage_types::{
    ElementRect, IntersectionEntry, IntersectionOptions, ScrollBehavior, SectionId, ViewportRect,
};

use crate::{
    host::{IntersectionCallback, ScrollCallback, ViewportHost, VisibilityWatch},
    state::{Listeners, Subscription},
    tracker::VisibilityTracker,
};

/// Scrolls instantly regardless of the requested behavior and records every
/// request.
pub(crate) struct TestHost {
    offset: Cell<f64>,
    viewport_height: f64,
    elements: RefCell<BTreeMap<SectionId, ElementRect>>,
    scroll: Listeners<f64>,
    tracker: VisibilityTracker,
    requests: RefCell<Vec<(SectionId, ScrollBehavior)>>,
}

impl TestHost {
    /// Five 1000px sections stacked from the top, 800px viewport.
    pub(crate) fn standard() -> Rc<Self> {
        let elements = SectionId::ALL
            .into_iter()
            .enumerate()
            .map(|(index, id)| (id, ElementRect::new(index as f64 * 1000.0, 1000.0)))
            .collect();
        Rc::new(Self::with_elements(elements, 800.0))
    }

    pub(crate) fn with_elements(
        elements: BTreeMap<SectionId, ElementRect>,
        viewport_height: f64,
    ) -> Self {
        Self {
            offset: Cell::new(0.0),
            viewport_height,
            elements: RefCell::new(elements),
            scroll: Listeners::new(),
            tracker: VisibilityTracker::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn set_offset(&self, offset: f64) {
        self.offset.set(offset);
        self.scroll.emit(&offset);
        self.evaluate();
    }

    pub(crate) fn remove_element(&self, id: SectionId) {
        self.elements.borrow_mut().remove(&id);
    }

    pub(crate) fn requests(&self) -> Vec<(SectionId, ScrollBehavior)> {
        self.requests.borrow().clone()
    }

    pub(crate) fn scroll_listener_count(&self) -> usize {
        self.scroll.len()
    }

    pub(crate) fn tracker(&self) -> &VisibilityTracker {
        &self.tracker
    }

    fn evaluate(&self) {
        let viewport = ViewportRect::new(self.offset.get(), self.viewport_height);
        let elements = self.elements.borrow().clone();
        self.tracker.evaluate(|target, margin| {
            elements
                .get(&target)
                .map(|rect| IntersectionEntry::measure(target, *rect, viewport, margin))
        });
    }
}

impl ViewportHost for TestHost {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn observe_scroll(&self, callback: ScrollCallback) -> Subscription {
        let callback = RefCell::new(callback);
        self.scroll.subscribe(move |offset| (callback.borrow_mut())(*offset))
    }

    fn observe_visibility(
        &self,
        targets: &[SectionId],
        options: IntersectionOptions,
        callback: IntersectionCallback,
    ) -> VisibilityWatch {
        let watch = {
            let elements = self.elements.borrow();
            self.tracker
                .watch(targets, options, callback, |id| elements.contains_key(&id))
        };
        self.evaluate();
        watch
    }

    fn scroll_element_into_view(&self, target: SectionId, behavior: ScrollBehavior) -> bool {
        let Some(rect) = self.elements.borrow().get(&target).copied() else {
            return false;
        };
        self.requests.borrow_mut().push((target, behavior));
        self.set_offset(rect.top);
        true
    }
}
