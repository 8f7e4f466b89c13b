//! Core domain types for Frontpage.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

pub mod geometry;
mod navigation;
mod section;
mod settings;
pub mod ui;

pub use geometry::{ElementRect, IntersectionEntry, IntersectionOptions, RootMargin, ViewportRect};
pub use navigation::{NavigationResult, ScrollBehavior};
pub use section::{RegistryError, SectionEntry, SectionId, SectionParseError, SectionRegistry};
pub use settings::{
    ControllerSettings, HEADER_THRESHOLD_PX, REVEAL_ROOT_MARGIN_BOTTOM_PX, REVEAL_THRESHOLD,
};
