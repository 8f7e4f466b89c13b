//! One-shot reveal of sections as they scroll into view.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use frontpage_types::{IntersectionOptions, SectionId, SectionRegistry, ui::RevealPhase};
use tracing::debug;

use crate::{
    host::{IntersectionCallback, ViewportHost, WatchControl},
    state::{Listeners, Subscription},
};

type Records = Rc<RefCell<BTreeMap<SectionId, RevealPhase>>>;

/// Watches the registry's observable sections and fires one reveal event per
/// section.
///
/// Each section moves `Pending -> Revealed` exactly once. The host is told to
/// drop its watch on a section as soon as that section is revealed.
#[derive(Debug)]
pub struct ViewportVisibilityObserver {
    options: IntersectionOptions,
    records: Records,
    reveals: Listeners<SectionId>,
    watch: Option<Subscription>,
}

impl ViewportVisibilityObserver {
    #[must_use]
    pub fn new(registry: &SectionRegistry, options: IntersectionOptions) -> Self {
        let records = registry
            .observable()
            .map(|id| (id, RevealPhase::Pending))
            .collect();
        Self {
            options,
            records: Rc::new(RefCell::new(records)),
            reveals: Listeners::new(),
            watch: None,
        }
    }

    /// Begin watching every section that has not been revealed yet.
    ///
    /// Sections without an element in the host are skipped; the rest are
    /// watched normally. Calling `start` while already watching does nothing.
    pub fn start(&mut self, host: &dyn ViewportHost) {
        if self.watch.is_some() {
            debug!("Visibility observer already started");
            return;
        }

        let pending: Vec<SectionId> = self
            .records
            .borrow()
            .iter()
            .filter(|(_, phase)| **phase == RevealPhase::Pending)
            .map(|(id, _)| *id)
            .collect();
        if pending.is_empty() {
            debug!("No pending sections to observe");
            return;
        }

        let watch = host.observe_visibility(&pending, self.options, self.reveal_callback());
        for section in &watch.missing {
            debug!(%section, "Observable section has no element; skipping");
        }
        debug!(observed = watch.observed.len(), "Visibility observer started");
        self.watch = Some(watch.subscription);
    }

    /// Release every watch. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(watch) = self.watch.take() {
            watch.release();
            debug!("Visibility observer stopped");
        }
    }

    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }

    #[must_use]
    pub fn phase(&self, section: SectionId) -> Option<RevealPhase> {
        self.records.borrow().get(&section).copied()
    }

    /// `false` for sections that are pending or not observable.
    #[must_use]
    pub fn has_entered(&self, section: SectionId) -> bool {
        self.phase(section).is_some_and(RevealPhase::has_entered)
    }

    #[must_use]
    pub fn records(&self) -> Vec<(SectionId, RevealPhase)> {
        self.records
            .borrow()
            .iter()
            .map(|(id, phase)| (*id, *phase))
            .collect()
    }

    /// Hear about each reveal as it happens.
    pub fn subscribe(&self, listener: impl Fn(&SectionId) + 'static) -> Subscription {
        self.reveals.subscribe(listener)
    }

    fn reveal_callback(&self) -> IntersectionCallback {
        let records = Rc::clone(&self.records);
        let reveals = self.reveals.clone();
        let options = self.options;
        Box::new(move |entry| {
            if !options.is_satisfied_by(entry) {
                return WatchControl::Keep;
            }
            let newly_revealed = {
                let mut records = records.borrow_mut();
                match records.get_mut(&entry.target) {
                    Some(phase @ RevealPhase::Pending) => {
                        *phase = RevealPhase::Revealed;
                        true
                    }
                    Some(RevealPhase::Revealed) | None => false,
                }
            };
            if newly_revealed {
                debug!(
                    section = %entry.target,
                    ratio = entry.intersection_ratio,
                    "Section revealed"
                );
                reveals.emit(&entry.target);
            }
            WatchControl::Release
        })
    }
}
