//! Core state machine behind the `select-dropdown` terminal control.
//!
//! The root module re-exports the types embedders need so they can drive a
//! [`DropdownController`] without digging through the module hierarchy.
//! Nothing here draws to a terminal; renderers consume a [`DropdownView`].

pub mod collaborators;
pub mod controller;
pub mod filter;
pub mod navigation;
pub mod selection;
pub mod types;
pub mod view;

pub use crate::collaborators::{FocusScope, Positioner};
pub use crate::controller::{
	ChangeHandler, DismissReason, DropdownConfig, DropdownController, DropdownEvent, OpenState,
};
pub use crate::filter::{FilterEngine, FilteredOptions};
pub use crate::navigation::{Direction, NavigationController};
pub use crate::selection::{SelectionModel, SelectionOutcome};
pub use crate::types::{OptionId, SelectOption, SelectionMode, Value};
pub use crate::view::{DropdownView, ListStatus, OptionRow, TriggerSummary};
