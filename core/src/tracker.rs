//! Watch bookkeeping for [`ViewportHost`](crate::ViewportHost) implementations.
//!
//! Hosts own geometry; this owns who is watching what and when an entry is
//! due. An entry is due once right after a target is observed and then on
//! every threshold crossing.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use frontpage_types::{IntersectionEntry, IntersectionOptions, RootMargin, SectionId};
use tracing::{debug, warn};

use crate::{
    host::{IntersectionCallback, VisibilityWatch, WatchControl},
    state::Subscription,
};

struct TargetSlot {
    id: SectionId,
    /// `None` until the first report.
    last_satisfied: Option<bool>,
}

struct WatchSlot {
    id: u64,
    options: IntersectionOptions,
    targets: Vec<TargetSlot>,
    callback: Rc<RefCell<IntersectionCallback>>,
}

#[derive(Default)]
struct TrackerState {
    watches: RefCell<Vec<WatchSlot>>,
    next_id: Cell<u64>,
}

/// Shared between a host and the subscriptions it hands out.
#[derive(Clone, Default)]
pub struct VisibilityTracker {
    inner: Rc<TrackerState>,
}

impl VisibilityTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a watch. Targets for which `exists` is false are reported as
    /// missing and never watched.
    ///
    /// Call [`evaluate`](Self::evaluate) afterwards to deliver the initial
    /// entries.
    pub fn watch(
        &self,
        targets: &[SectionId],
        options: IntersectionOptions,
        callback: IntersectionCallback,
        exists: impl Fn(SectionId) -> bool,
    ) -> VisibilityWatch {
        let (observed, missing): (Vec<SectionId>, Vec<SectionId>) =
            targets.iter().copied().partition(|target| exists(*target));

        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.watches.borrow_mut().push(WatchSlot {
            id,
            options,
            targets: observed
                .iter()
                .map(|target| TargetSlot {
                    id: *target,
                    last_satisfied: None,
                })
                .collect(),
            callback: Rc::new(RefCell::new(callback)),
        });

        let weak: Weak<TrackerState> = Rc::downgrade(&self.inner);
        let subscription = Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.watches.borrow_mut().retain(|watch| watch.id != id);
                debug!(watch = id, "Visibility watch disconnected");
            }
        });

        VisibilityWatch {
            observed,
            missing,
            subscription,
        }
    }

    /// Measure every watched target and deliver due entries.
    ///
    /// `measure` returns `None` when a target's element has disappeared; such
    /// targets are left alone until they come back.
    pub fn evaluate(&self, measure: impl Fn(SectionId, RootMargin) -> Option<IntersectionEntry>) {
        let mut due: Vec<(u64, Rc<RefCell<IntersectionCallback>>, Vec<IntersectionEntry>)> =
            Vec::new();
        {
            let mut watches = self.inner.watches.borrow_mut();
            for watch in watches.iter_mut() {
                let mut entries = Vec::new();
                for target in &mut watch.targets {
                    let Some(entry) = measure(target.id, watch.options.root_margin) else {
                        continue;
                    };
                    let satisfied = watch.options.is_satisfied_by(&entry);
                    if target.last_satisfied != Some(satisfied) {
                        target.last_satisfied = Some(satisfied);
                        entries.push(entry);
                    }
                }
                if !entries.is_empty() {
                    due.push((watch.id, Rc::clone(&watch.callback), entries));
                }
            }
        }

        for (watch_id, callback, entries) in due {
            for entry in entries {
                // The watch or target may have gone away during an earlier callback.
                if !self.is_watching_in(watch_id, entry.target) {
                    continue;
                }
                let control = match callback.try_borrow_mut() {
                    Ok(mut callback) => callback(&entry),
                    Err(_) => {
                        warn!(section = %entry.target, "Skipping re-entrant intersection delivery");
                        continue;
                    }
                };
                if control == WatchControl::Release {
                    self.release_target(watch_id, entry.target);
                }
            }
        }
    }

    /// Whether any watch is still observing `target`.
    #[must_use]
    pub fn is_watching(&self, target: SectionId) -> bool {
        self.inner
            .watches
            .borrow()
            .iter()
            .any(|watch| watch.targets.iter().any(|slot| slot.id == target))
    }

    #[must_use]
    pub fn watch_count(&self) -> usize {
        self.inner.watches.borrow().len()
    }

    fn is_watching_in(&self, watch_id: u64, target: SectionId) -> bool {
        self.inner.watches.borrow().iter().any(|watch| {
            watch.id == watch_id && watch.targets.iter().any(|slot| slot.id == target)
        })
    }

    fn release_target(&self, watch_id: u64, section: SectionId) {
        let mut watches = self.inner.watches.borrow_mut();
        if let Some(watch) = watches.iter_mut().find(|watch| watch.id == watch_id) {
            watch.targets.retain(|slot| slot.id != section);
            debug!(watch = watch_id, %section, "Stopped watching target");
        }
    }
}

impl fmt::Debug for VisibilityTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityTracker")
            .field("watches", &self.watch_count())
            .finish()
    }
}
