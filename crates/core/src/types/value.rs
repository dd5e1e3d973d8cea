use std::collections::HashSet;
use std::slice;

use serde::{Deserialize, Serialize};

use super::{OptionId, SelectOption, SelectionMode};

/// The committed selection of a control.
///
/// `Multiple` keeps options in the order they were picked, not in source
/// order, and is never empty: removing the last element collapses the value
/// to `None`. Serialized untagged, so `None` is `null`, `Single` an option
/// object and `Multiple` an array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	#[default]
	None,
	Single(SelectOption),
	Multiple(Vec<SelectOption>),
}

impl Value {
	/// Build a value for `mode` out of an arbitrary list of options.
	///
	/// Duplicate ids keep their first occurrence, an empty list becomes
	/// [`Value::None`] and single mode keeps only the first option.
	#[must_use]
	pub fn from_selection(options: Vec<SelectOption>, mode: SelectionMode) -> Self {
		let mut seen = HashSet::new();
		let mut unique: Vec<SelectOption> = options
			.into_iter()
			.filter(|option| seen.insert(option.id.clone()))
			.collect();

		if unique.is_empty() {
			return Self::None;
		}

		match mode {
			SelectionMode::Single => Self::Single(unique.swap_remove(0)),
			SelectionMode::Multiple => Self::Multiple(unique),
		}
	}

	/// Reshape an externally supplied value so it matches `mode`.
	#[must_use]
	pub fn normalized(self, mode: SelectionMode) -> Self {
		Self::from_selection(self.into_selected(), mode)
	}

	/// Selected options in selection order.
	#[must_use]
	pub fn selected(&self) -> &[SelectOption] {
		match self {
			Self::None => &[],
			Self::Single(option) => slice::from_ref(option),
			Self::Multiple(options) => options,
		}
	}

	#[must_use]
	pub fn into_selected(self) -> Vec<SelectOption> {
		match self {
			Self::None => Vec::new(),
			Self::Single(option) => vec![option],
			Self::Multiple(options) => options,
		}
	}

	#[must_use]
	pub fn contains(&self, id: &OptionId) -> bool {
		self.selected().iter().any(|option| &option.id == id)
	}

	pub fn ids(&self) -> impl Iterator<Item = &OptionId> {
		self.selected().iter().map(|option| &option.id)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.selected().len()
	}

	/// `true` for [`Value::None`]. An empty `Multiple` is treated the same.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.selected().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn apple() -> SelectOption {
		SelectOption::new(1, "Apple")
	}

	fn banana() -> SelectOption {
		SelectOption::new(2, "Banana")
	}

	#[test]
	fn single_value_is_wrapped_in_multiple_mode() {
		let value = Value::Single(apple()).normalized(SelectionMode::Multiple);
		assert_eq!(value, Value::Multiple(vec![apple()]));
	}

	#[test]
	fn multiple_value_keeps_first_in_single_mode() {
		let value = Value::Multiple(vec![banana(), apple()]).normalized(SelectionMode::Single);
		assert_eq!(value, Value::Single(banana()));
	}

	#[test]
	fn empty_multiple_collapses_to_none() {
		assert_eq!(
			Value::Multiple(Vec::new()).normalized(SelectionMode::Multiple),
			Value::None
		);
		assert!(Value::Multiple(Vec::new()).is_empty());
	}

	#[test]
	fn duplicate_ids_keep_first_occurrence() {
		let renamed = SelectOption::new(1, "Apple again");
		let value = Value::from_selection(
			vec![apple(), banana(), renamed],
			SelectionMode::Multiple,
		);
		assert_eq!(value, Value::Multiple(vec![apple(), banana()]));
	}

	#[test]
	fn json_shapes_follow_the_variant() {
		assert_eq!(serde_json::to_string(&Value::None).unwrap(), "null");

		let single: Value = serde_json::from_str(r#"{ "id": 1, "label": "Apple" }"#).unwrap();
		assert_eq!(single, Value::Single(apple()));

		let multiple: Value =
			serde_json::from_str(r#"[{ "id": 2, "label": "Banana" }]"#).unwrap();
		assert_eq!(multiple, Value::Multiple(vec![banana()]));
	}
}
