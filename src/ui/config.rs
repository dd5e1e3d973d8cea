use serde::{Deserialize, Serialize};

/// Where the popover is drawn relative to the rest of the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mount {
	/// Inside the area below the trigger, never covering the footer.
	#[default]
	Inline,
	/// On top of everything else, free to flip above the trigger.
	Overlay,
}

impl Mount {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Inline => "inline",
			Self::Overlay => "overlay",
		}
	}
}

/// Built-in ways to turn an option into a row label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
	Label,
	/// Icon followed by the label when the option has one.
	#[default]
	Icon,
	/// Label followed by the option id.
	Id,
}

impl LabelFormat {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Label => "label",
			Self::Icon => "icon",
			Self::Id => "id",
		}
	}
}

/// Text and layout knobs of the terminal renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: Option<String>,
	pub placeholder: String,
	pub search_placeholder: String,
	pub no_options_label: String,
	pub no_matches_label: String,
	pub no_matches_hint: String,
	/// Bordered trigger instead of an underline.
	pub outlined: bool,
	pub mount: Mount,
	/// Maximum number of list rows in the popover.
	pub max_height: u16,
	/// Rows left empty between the trigger and the popover.
	pub popover_gap: u16,
	pub label_format: LabelFormat,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: None,
			placeholder: "Select an option...".to_string(),
			search_placeholder: "Search options...".to_string(),
			no_options_label: "No options available".to_string(),
			no_matches_label: "No options found".to_string(),
			no_matches_hint: "Try adjusting your search terms".to_string(),
			outlined: true,
			mount: Mount::Inline,
			max_height: 10,
			popover_gap: 1,
			label_format: LabelFormat::Icon,
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn with_mount(mut self, mount: Mount) -> Self {
		self.mount = mount;
		self
	}

	#[must_use]
	pub fn with_max_height(mut self, rows: u16) -> Self {
		self.max_height = rows.max(1);
		self
	}

	#[must_use]
	pub fn with_popover_gap(mut self, rows: u16) -> Self {
		self.popover_gap = rows;
		self
	}
}
