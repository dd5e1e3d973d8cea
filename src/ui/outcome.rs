use select_dropdown_core::Value;
use serde::Serialize;

/// How the interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOutcome {
	/// `false` when the user cancelled.
	pub accepted: bool,
	pub value: Value,
}
