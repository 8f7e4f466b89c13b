//! UI state types shared by the controllers and the terminal renderer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

mod animation;
mod menu;
mod options;
mod reveal;
mod scroll;

pub use animation::{AnimPhase, EffectTimer, ease_in_out_cubic, ease_out_cubic};
pub use menu::MenuState;
pub use options::UiOptions;
pub use reveal::RevealPhase;
pub use scroll::ScrollState;
