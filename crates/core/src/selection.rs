//! Single and multiple selection policies.
//!
//! [`toggle`] and [`remove`] are pure: they compute the value that *would*
//! result from a request together with the side effects the controller has
//! to carry out. [`SelectionModel`] pairs them with the current value.

use crate::types::{OptionId, SelectOption, SelectionMode, Value};

/// Result of resolving a selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
	/// Value after the request. Equal to the input when nothing was committed.
	pub value: Value,
	/// The request produced a change that should be reported to the caller.
	pub committed: bool,
	/// The popover should close (single mode picks).
	pub close_requested: bool,
	/// The filter query should be cleared (single mode picks).
	pub clear_query: bool,
}

impl SelectionOutcome {
	fn unchanged(current: &Value) -> Self {
		Self {
			value: current.clone(),
			committed: false,
			close_requested: false,
			clear_query: false,
		}
	}

	fn committed(value: Value) -> Self {
		Self {
			value,
			committed: true,
			close_requested: false,
			clear_query: false,
		}
	}
}

/// Resolve a pick of `option` against `current`.
///
/// Single mode always replaces the value, even when the same option is picked
/// again, and asks for the popover to close. Multiple mode removes an option
/// that is already selected and appends any other one at the end.
#[must_use]
pub fn toggle(current: &Value, mode: SelectionMode, option: &SelectOption) -> SelectionOutcome {
	if option.disabled {
		return SelectionOutcome::unchanged(current);
	}

	match mode {
		SelectionMode::Single => SelectionOutcome {
			value: Value::Single(option.clone()),
			committed: true,
			close_requested: true,
			clear_query: true,
		},
		SelectionMode::Multiple => {
			let mut selected = current.clone().normalized(mode).into_selected();
			match selected.iter().position(|entry| entry.id == option.id) {
				Some(position) => {
					selected.remove(position);
				}
				None => selected.push(option.clone()),
			}
			SelectionOutcome::committed(Value::from_selection(selected, mode))
		}
	}
}

/// Resolve an explicit removal, as issued by a chip's remove control.
#[must_use]
pub fn remove(current: &Value, mode: SelectionMode, option: &SelectOption) -> SelectionOutcome {
	if option.disabled {
		return SelectionOutcome::unchanged(current);
	}

	match mode {
		SelectionMode::Single => SelectionOutcome::committed(Value::None),
		SelectionMode::Multiple => {
			let remaining = current
				.clone()
				.normalized(mode)
				.into_selected()
				.into_iter()
				.filter(|entry| entry.id != option.id)
				.collect();
			SelectionOutcome::committed(Value::from_selection(remaining, mode))
		}
	}
}

/// Current value of a control together with its selection policy.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
	mode: SelectionMode,
	value: Value,
}

impl SelectionModel {
	#[must_use]
	pub fn new(mode: SelectionMode, value: Value) -> Self {
		Self {
			mode,
			value: value.normalized(mode),
		}
	}

	#[must_use]
	pub fn mode(&self) -> SelectionMode {
		self.mode
	}

	#[must_use]
	pub fn value(&self) -> &Value {
		&self.value
	}

	#[must_use]
	pub fn is_selected(&self, id: &OptionId) -> bool {
		self.value.contains(id)
	}

	#[must_use]
	pub fn toggle(&self, option: &SelectOption) -> SelectionOutcome {
		toggle(&self.value, self.mode, option)
	}

	#[must_use]
	pub fn remove(&self, option: &SelectOption) -> SelectionOutcome {
		remove(&self.value, self.mode, option)
	}

	/// Replace the value, reshaping it to this model's mode.
	pub fn replace(&mut self, value: Value) {
		self.value = value.normalized(self.mode);
	}
}
