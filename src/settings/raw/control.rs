use select_dropdown::{DropdownConfig, SelectionMode};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Behavioural switches of the control.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ControlSection {
	pub(super) multiple: Option<bool>,
	pub(super) search: Option<bool>,
	pub(super) disabled: Option<bool>,
	pub(super) skip_disabled: Option<bool>,
}

impl ControlSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(multiple) = cli.multiple {
			self.multiple = Some(multiple);
		}
		if let Some(search) = cli.search {
			self.search = Some(search);
		}
		if let Some(disabled) = cli.disabled {
			self.disabled = Some(disabled);
		}
		if let Some(skip) = cli.skip_disabled {
			self.skip_disabled = Some(skip);
		}
	}

	pub(super) fn resolve(self) -> DropdownConfig {
		let defaults = DropdownConfig::default();
		DropdownConfig {
			mode: self
				.multiple
				.map_or(defaults.mode, SelectionMode::from_multiple),
			with_search: self.search.unwrap_or(defaults.with_search),
			disabled: self.disabled.unwrap_or(defaults.disabled),
			skip_disabled: self.skip_disabled.unwrap_or(defaults.skip_disabled),
		}
	}
}
