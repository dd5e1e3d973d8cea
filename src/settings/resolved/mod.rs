use select_dropdown::{DropdownConfig, OptionId, SelectOption, UiConfig, Value};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub options: Vec<SelectOption>,
	/// Initially selected ids, already matched against `options`.
	pub initial_ids: Vec<OptionId>,
	pub control: DropdownConfig,
	pub ui: UiConfig,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// The value the controller starts with, in the order the ids were given.
	pub fn initial_value(&self) -> Value {
		let selected = self
			.initial_ids
			.iter()
			.filter_map(|id| self.options.iter().find(|option| &option.id == id))
			.cloned()
			.collect();
		Value::from_selection(selected, self.control.mode)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
