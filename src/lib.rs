//! Terminal select dropdown with filtering and single or multiple selection.
//!
//! The state machine lives in `select-dropdown-core` and is re-exported here
//! together with the terminal host, so embedders can configure and run a
//! dropdown without digging through the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod options;
pub mod ui;

pub use select_dropdown_core as core;
pub use select_dropdown_core::{
	DismissReason, DropdownConfig, DropdownController, DropdownEvent, OptionId, SelectOption,
	SelectionMode, Value,
};
pub use ui::{DropdownOutcome, DropdownUi, LabelFormat, Mount, UiConfig};
