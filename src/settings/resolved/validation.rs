use select_dropdown::options::{self, OptionsError};

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.ui.max_height == 0 {
		return Err(ConfigError::invalid(
			"ui.max_height",
			"0",
			sources.source_for_max_height(),
			"must be at least 1",
		));
	}

	if let Err(OptionsError::DuplicateId(id)) = options::ensure_unique_ids(&config.options) {
		return Err(ConfigError::invalid(
			"options",
			id.to_string(),
			sources.source_for_options(),
			"option ids must be unique",
		));
	}

	if !config.control.mode.is_multiple() && config.initial_ids.len() > 1 {
		let ids: Vec<String> = config.initial_ids.iter().map(ToString::to_string).collect();
		return Err(ConfigError::invalid(
			"value",
			ids.join(","),
			sources.source_for_value(),
			"single selection accepts at most one id",
		));
	}

	for id in &config.initial_ids {
		match config.options.iter().find(|option| &option.id == id) {
			None => {
				return Err(ConfigError::invalid(
					"value",
					id.to_string(),
					sources.source_for_value(),
					"no option has this id",
				));
			}
			Some(option) if option.disabled => {
				return Err(ConfigError::invalid(
					"value",
					id.to_string(),
					sources.source_for_value(),
					format!("option `{}` is disabled", option.label),
				));
			}
			Some(_) => {}
		}
	}

	Ok(())
}
