use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of a [`SelectOption`].
///
/// Option sets loaded from JSON may use either numbers or strings, so both are
/// accepted and compared by value. Numbers and strings never compare equal,
/// `1` and `"1"` are distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionId {
	Number(i64),
	Text(String),
}

impl fmt::Display for OptionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(value) => write!(f, "{value}"),
			Self::Text(value) => f.write_str(value),
		}
	}
}

impl From<i64> for OptionId {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}

impl From<i32> for OptionId {
	fn from(value: i32) -> Self {
		Self::Number(i64::from(value))
	}
}

impl From<&str> for OptionId {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for OptionId {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

/// Parses command line style ids: anything that reads as an integer becomes
/// [`OptionId::Number`], everything else is kept verbatim as text.
impl FromStr for OptionId {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		Ok(match trimmed.parse::<i64>() {
			Ok(number) => Self::Number(number),
			Err(_) => Self::Text(trimmed.to_string()),
		})
	}
}

/// A single candidate shown in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
	pub id: OptionId,
	pub label: String,
	/// Opaque glyph drawn next to the label by renderers.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
	#[serde(default, skip_serializing_if = "is_false")]
	pub disabled: bool,
}

fn is_false(value: &bool) -> bool {
	!*value
}

impl SelectOption {
	/// Create an enabled option without an icon.
	#[must_use]
	pub fn new(id: impl Into<OptionId>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			icon: None,
			disabled: false,
		}
	}

	#[must_use]
	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	/// Mark this option as disabled. Disabled options are shown but can never
	/// become part of a [`Value`](crate::Value).
	#[must_use]
	pub fn disabled(mut self) -> Self {
		self.disabled = true;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_parse_numbers_before_text() {
		assert_eq!("42".parse::<OptionId>().unwrap(), OptionId::Number(42));
		assert_eq!(" -3 ".parse::<OptionId>().unwrap(), OptionId::Number(-3));
		assert_eq!(
			"banana".parse::<OptionId>().unwrap(),
			OptionId::Text("banana".into())
		);
	}

	#[test]
	fn numeric_and_text_ids_are_distinct() {
		assert_ne!(OptionId::from(1), OptionId::from("1"));
	}

	#[test]
	fn options_deserialize_with_defaults() {
		let option: SelectOption =
			serde_json::from_str(r#"{ "id": 7, "label": "Seven" }"#).unwrap();
		assert_eq!(option, SelectOption::new(7, "Seven"));

		let option: SelectOption = serde_json::from_str(
			r#"{ "id": "x", "label": "Ex", "icon": "*", "disabled": true }"#,
		)
		.unwrap();
		assert_eq!(option, SelectOption::new("x", "Ex").with_icon("*").disabled());
	}

	#[test]
	fn serialization_skips_default_fields() {
		let json = serde_json::to_string(&SelectOption::new(1, "One")).unwrap();
		assert_eq!(json, r#"{"id":1,"label":"One"}"#);
	}
}
