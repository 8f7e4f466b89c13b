//! In-page navigation.

use std::rc::Rc;

use frontpage_types::{NavigationResult, ScrollBehavior, SectionId, SectionRegistry};
use tracing::debug;

use crate::{host::ViewportHost, menu::MobileMenuController};

/// Resolves section identifiers and scrolls the host to them.
///
/// A successful navigation force-closes the mobile menu. Unknown identifiers
/// and sections without an element leave everything untouched.
pub struct SectionNavigator {
    registry: SectionRegistry,
    host: Rc<dyn ViewportHost>,
    menu: MobileMenuController,
    behavior: ScrollBehavior,
}

impl SectionNavigator {
    #[must_use]
    pub fn new(
        registry: SectionRegistry,
        host: Rc<dyn ViewportHost>,
        menu: MobileMenuController,
        behavior: ScrollBehavior,
    ) -> Self {
        Self {
            registry,
            host,
            menu,
            behavior,
        }
    }

    pub fn navigate_to(&self, identifier: &str) -> NavigationResult {
        match self.registry.resolve(identifier) {
            Some(section) => self.navigate_to_section(section),
            None => {
                debug!(identifier, "Navigation target not registered");
                NavigationResult::NotFound
            }
        }
    }

    pub fn navigate_to_section(&self, section: SectionId) -> NavigationResult {
        if !section.is_navigable() || !self.registry.contains(section) {
            debug!(%section, "Section is not a navigation target");
            return NavigationResult::NotFound;
        }
        if !self.host.scroll_element_into_view(section, self.behavior) {
            debug!(%section, "Navigation target has no element");
            return NavigationResult::NotFound;
        }
        self.menu.force_close();
        debug!(%section, behavior = ?self.behavior, "Navigated");
        NavigationResult::Navigated(section)
    }

    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }
}
