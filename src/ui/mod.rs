//! Terminal host for the dropdown.
//!
//! [`DropdownUi`] is the public builder. The remaining submodules implement
//! the event loop, input routing, popover placement and the widgets drawn
//! for the trigger and the popover.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod keymap;
mod outcome;
pub mod popover;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::DropdownUi;
pub use config::{LabelFormat, Mount, UiConfig};
pub use outcome::DropdownOutcome;
pub use state::{App, LabelDelegate, TerminalController};
