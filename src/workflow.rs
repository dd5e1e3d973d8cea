use anyhow::Result;
use select_dropdown::{DropdownOutcome, DropdownUi, Value};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive dropdown.
pub(crate) struct DropdownWorkflow {
	dropdown: DropdownUi,
}

impl DropdownWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let value = config.initial_value();
		let ResolvedConfig {
			options,
			control,
			ui,
			..
		} = config;

		let dropdown = DropdownUi::new(options)
			.with_config(control)
			.with_value(value)
			.with_ui_config(ui)
			.on_change(log_change);
		Self { dropdown }
	}

	pub(crate) fn run(self) -> Result<DropdownOutcome> {
		self.dropdown.run()
	}
}

fn log_change(value: &Value) {
	let ids: Vec<String> = value.ids().map(ToString::to_string).collect();
	info!(ids = %ids.join(","), "selection changed");
}
