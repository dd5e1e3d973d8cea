use select_dropdown::{LabelFormat, Mount, UiConfig};
use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) search_placeholder: Option<String>,
	pub(super) no_options_label: Option<String>,
	pub(super) no_matches_label: Option<String>,
	pub(super) no_matches_hint: Option<String>,
	pub(super) outlined: Option<bool>,
	pub(super) mount: Option<Mount>,
	pub(super) max_height: Option<u16>,
	pub(super) popover_gap: Option<u16>,
	pub(super) label_format: Option<LabelFormat>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(text) = cli.placeholder.clone() {
			self.placeholder = Some(text);
		}
		if let Some(text) = cli.search_placeholder.clone() {
			self.search_placeholder = Some(text);
		}
		if let Some(outlined) = cli.outlined {
			self.outlined = Some(outlined);
		}
		if let Some(mount) = cli.mount {
			self.mount = Some(mount.into());
		}
		if let Some(rows) = cli.max_height {
			self.max_height = Some(rows);
		}
		if let Some(format) = cli.label_format {
			self.label_format = Some(format.into());
		}
	}

	/// Fill in defaults. `max_height` is copied verbatim so validation can
	/// report a zero.
	pub(super) fn finalize(self) -> UiConfig {
		let mut ui = UiConfig::default();
		ui.title = non_blank(self.title);
		if let Some(text) = self.placeholder {
			ui.placeholder = text;
		}
		if let Some(text) = self.search_placeholder {
			ui.search_placeholder = text;
		}
		if let Some(text) = self.no_options_label {
			ui.no_options_label = text;
		}
		if let Some(text) = self.no_matches_label {
			ui.no_matches_label = text;
		}
		if let Some(text) = self.no_matches_hint {
			ui.no_matches_hint = text;
		}
		if let Some(outlined) = self.outlined {
			ui.outlined = outlined;
		}
		if let Some(mount) = self.mount {
			ui.mount = mount;
		}
		if let Some(rows) = self.max_height {
			ui.max_height = rows;
		}
		if let Some(rows) = self.popover_gap {
			ui.popover_gap = rows;
		}
		if let Some(format) = self.label_format {
			ui.label_format = format;
		}
		ui
	}
}
