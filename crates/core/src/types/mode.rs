use serde::{Deserialize, Serialize};

/// Selection policy of a control. Fixed for the lifetime of a controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
	#[default]
	Single,
	Multiple,
}

impl SelectionMode {
	/// Map the `multiple` flag used by configuration onto a mode.
	#[must_use]
	pub const fn from_multiple(multiple: bool) -> Self {
		if multiple { Self::Multiple } else { Self::Single }
	}

	#[must_use]
	pub const fn is_multiple(self) -> bool {
		matches!(self, Self::Multiple)
	}

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Single => "single",
			Self::Multiple => "multiple",
		}
	}
}
