//! Root composition of the page controllers.

use std::rc::Rc;

use frontpage_types::{
    ControllerSettings, NavigationResult, SectionId, SectionRegistry,
    ui::{MenuState, ScrollState},
};
use tracing::{debug, info};

use crate::{
    host::ViewportHost,
    menu::MobileMenuController,
    navigator::SectionNavigator,
    scroll_monitor::ScrollPositionMonitor,
    state::Subscription,
    visibility::ViewportVisibilityObserver,
};

/// Wires the four controllers to a host.
///
/// Build with [`Page::new`], subscribe to whatever the renderer needs, then
/// [`mount`](Page::mount). Host registrations live until [`unmount`](Page::unmount)
/// or drop.
pub struct Page {
    host: Rc<dyn ViewportHost>,
    scroll: ScrollPositionMonitor,
    visibility: ViewportVisibilityObserver,
    navigator: SectionNavigator,
    menu: MobileMenuController,
    scroll_subscription: Option<Subscription>,
}

impl Page {
    #[must_use]
    pub fn new(
        host: Rc<dyn ViewportHost>,
        registry: SectionRegistry,
        settings: ControllerSettings,
    ) -> Self {
        let menu = MobileMenuController::new();
        let visibility = ViewportVisibilityObserver::new(&registry, settings.reveal);
        let navigator = SectionNavigator::new(
            registry,
            Rc::clone(&host),
            menu.clone(),
            settings.scroll_behavior,
        );
        Self {
            host,
            scroll: ScrollPositionMonitor::new(settings.header_threshold_px),
            visibility,
            navigator,
            menu,
            scroll_subscription: None,
        }
    }

    /// Subscribe to scroll events, sync the header with the current offset
    /// and start observing sections. Mounting twice does nothing.
    pub fn mount(&mut self) {
        if self.is_mounted() {
            debug!("Page already mounted");
            return;
        }

        let monitor = self.scroll.clone();
        self.scroll_subscription = Some(self.host.observe_scroll(Box::new(move |offset| {
            monitor.on_scroll_event(offset);
        })));
        self.scroll.on_scroll_event(self.host.scroll_offset());
        self.visibility.start(&*self.host);
        info!(
            sections = self.navigator.registry().len(),
            "Page mounted"
        );
    }

    /// Release every host registration. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        let was_mounted = self.is_mounted();
        if let Some(subscription) = self.scroll_subscription.take() {
            subscription.release();
        }
        self.visibility.stop();
        if was_mounted {
            info!("Page unmounted");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.scroll_subscription.is_some()
    }

    pub fn navigate_to(&self, identifier: &str) -> NavigationResult {
        self.navigator.navigate_to(identifier)
    }

    pub fn navigate_to_section(&self, section: SectionId) -> NavigationResult {
        self.navigator.navigate_to_section(section)
    }

    pub fn toggle_menu(&self) -> MenuState {
        self.menu.toggle()
    }

    pub fn close_menu(&self) {
        self.menu.force_close();
    }

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    #[must_use]
    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    #[must_use]
    pub fn has_entered(&self, section: SectionId) -> bool {
        self.visibility.has_entered(section)
    }

    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        self.navigator.registry()
    }

    #[must_use]
    pub fn scroll_monitor(&self) -> &ScrollPositionMonitor {
        &self.scroll
    }

    #[must_use]
    pub fn visibility(&self) -> &ViewportVisibilityObserver {
        &self.visibility
    }

    #[must_use]
    pub fn menu(&self) -> &MobileMenuController {
        &self.menu
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::TestHost;
    use std::cell::RefCell;

    fn mounted(host: &Rc<TestHost>) -> Page {
        let mut page = Page::new(
            host.clone(),
            SectionRegistry::standard(),
            ControllerSettings::default(),
        );
        page.mount();
        page
    }

    #[test]
    fn mount_registers_with_host() {
        let host = TestHost::standard();
        let page = mounted(&host);
        assert!(page.is_mounted());
        assert_eq!(host.scroll_listener_count(), 1);
        assert_eq!(host.tracker().watch_count(), 1);
    }

    #[test]
    fn mount_syncs_header_with_current_offset() {
        let host = TestHost::standard();
        host.set_offset(200.0);
        let page = mounted(&host);
        assert!(page.scroll_state().is_past_threshold);
    }

    #[test]
    fn scroll_events_drive_header_state() {
        let host = TestHost::standard();
        let page = mounted(&host);
        assert!(!page.scroll_state().is_past_threshold);
        host.set_offset(51.0);
        assert!(page.scroll_state().is_past_threshold);
        host.set_offset(50.0);
        assert!(!page.scroll_state().is_past_threshold);
    }

    #[test]
    fn navigation_closes_menu_and_reveals_target() {
        let host = TestHost::standard();
        let page = mounted(&host);
        assert_eq!(page.toggle_menu(), MenuState::Open);

        let result = page.navigate_to("portfolio");

        assert_eq!(result, NavigationResult::Navigated(SectionId::Portfolio));
        assert_eq!(page.menu_state(), MenuState::Closed);
        assert!(page.scroll_state().is_past_threshold);
        assert!(page.has_entered(SectionId::Portfolio));
    }

    #[test]
    fn stale_link_is_ignored() {
        let host = TestHost::standard();
        let page = mounted(&host);
        page.toggle_menu();
        let before = (page.scroll_state(), page.menu_state(), page.visibility().records());

        assert_eq!(page.navigate_to("does-not-exist"), NavigationResult::NotFound);

        let after = (page.scroll_state(), page.menu_state(), page.visibility().records());
        assert_eq!(before, after);
    }

    #[test]
    fn header_listeners_hear_flips_only() {
        let host = TestHost::standard();
        let page = mounted(&host);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = page
            .scroll_monitor()
            .subscribe(move |state| sink.borrow_mut().push(state.is_past_threshold));

        for offset in [10.0, 60.0, 70.0, 500.0, 20.0] {
            host.set_offset(offset);
        }
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn unmount_releases_everything_and_is_idempotent() {
        let host = TestHost::standard();
        let mut page = mounted(&host);

        page.unmount();
        page.unmount();

        assert!(!page.is_mounted());
        assert_eq!(host.scroll_listener_count(), 0);
        assert_eq!(host.tracker().watch_count(), 0);
        host.set_offset(400.0);
        assert!(!page.scroll_state().is_past_threshold);
    }

    #[test]
    fn drop_releases_host_registrations() {
        let host = TestHost::standard();
        let page = mounted(&host);
        drop(page);
        assert_eq!(host.scroll_listener_count(), 0);
        assert_eq!(host.tracker().watch_count(), 0);
    }

    #[test]
    fn reveal_subscribers_registered_before_mount_see_initial_reveals() {
        let host = TestHost::standard();
        host.set_offset(400.0);
        let mut page = Page::new(
            host.clone(),
            SectionRegistry::standard(),
            ControllerSettings::default(),
        );
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = page
            .visibility()
            .subscribe(move |id| sink.borrow_mut().push(*id));

        page.mount();

        assert_eq!(*seen.borrow(), vec![SectionId::Mission]);
    }
}
