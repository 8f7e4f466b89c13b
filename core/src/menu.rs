//! Mobile navigation menu state machine.

use frontpage_types::ui::MenuState;
use tracing::debug;

use crate::state::{Store, Subscription};

/// Two-state machine: `Closed` (initial) and `Open`.
///
/// Clones share state, which is how the navigator reaches the menu.
#[derive(Debug, Clone)]
pub struct MobileMenuController {
    state: Store<MenuState>,
}

impl MobileMenuController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Store::new(MenuState::Closed),
        }
    }

    /// Flip between `Open` and `Closed`.
    pub fn toggle(&self) -> MenuState {
        let next = self.state.get().toggled();
        self.state.set(next);
        debug!(state = ?next, "Menu toggled");
        next
    }

    /// Move to `Closed`. No notification when already closed.
    pub fn force_close(&self) {
        if self.state.set(MenuState::Closed) {
            debug!("Menu force-closed");
        }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&MenuState) + 'static) -> Subscription {
        self.state.subscribe(listener)
    }
}

impl Default for MobileMenuController {
    fn default() -> Self {
        Self::new()
    }
}
