//! Page controllers for Frontpage.
//!
//! Four controllers share nothing but explicit calls:
//!
//! ```text
//! ViewportHost --scroll--> ScrollPositionMonitor   (header state)
//!              --entries-> ViewportVisibilityObserver (one-shot reveals)
//! SectionNavigator --scroll_element_into_view--> ViewportHost
//!                  --force_close--> MobileMenuController
//! ```
//!
//! [`Page`] wires them together. Everything runs on the UI thread.

mod host;
mod menu;
mod navigator;
mod page;
mod scroll_monitor;
mod state;
#[cfg(test)]
mod test_host;
mod tracker;
mod visibility;

pub use host::{IntersectionCallback, ScrollCallback, ViewportHost, VisibilityWatch, WatchControl};
pub use menu::MobileMenuController;
pub use navigator::SectionNavigator;
pub use page::Page;
pub use scroll_monitor::ScrollPositionMonitor;
pub use state::{Listeners, Store, Subscription};
pub use tracker::VisibilityTracker;
pub use visibility::ViewportVisibilityObserver;
