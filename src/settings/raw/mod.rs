use std::env;
use std::path::PathBuf;

use anyhow::{Context, Error, Result};
use serde::{Deserialize, Deserializer};
use select_dropdown::{OptionId, SelectOption, options};

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::util::canonical_id;

mod control;
mod ui;

use control::ControlSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	control: ControlSection,
	ui: UiSection,
	/// JSON array of options. Takes precedence over inline `[[options]]`.
	options_file: Option<PathBuf>,
	options: Option<Vec<SelectOption>>,
	/// Ids selected when the dropdown starts.
	#[serde(deserialize_with = "one_or_many_ids")]
	value: Option<Vec<OptionId>>,
}

/// Accept `value = 2` as well as `value = [2, 3]`. A single id arrives as a
/// scalar from the environment unless it contains a comma.
fn one_or_many_ids<'de, D>(deserializer: D) -> Result<Option<Vec<OptionId>>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Ids {
		One(OptionId),
		Many(Vec<OptionId>),
	}

	Ok(Option::<Ids>::deserialize(deserializer)?.map(|ids| match ids {
		Ids::One(id) => vec![id],
		Ids::Many(ids) => ids,
	}))
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.control.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);

		if let Some(labels) = &cli.options {
			self.options = Some(options::from_labels(labels));
			self.options_file = None;
		}
		if let Some(path) = &cli.options_file {
			self.options_file = Some(path.clone());
			self.options = None;
		}
		if let Some(ids) = &cli.select {
			self.value = Some(ids.clone());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], loading the
	/// option set and validating the result.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let options_source = if self.options_file.is_some() {
			detect_source(
				cli.options_file.is_some(),
				true,
				"SELECT_DROPDOWN__OPTIONS_FILE",
				"--options-file",
				"options_file",
			)
		} else {
			detect_source(
				cli.options.is_some(),
				self.options.is_some(),
				"SELECT_DROPDOWN__OPTIONS",
				"--options",
				"options",
			)
		};
		let sources = ConfigSources {
			max_height: detect_source(
				cli.max_height.is_some(),
				self.ui.max_height.is_some(),
				"SELECT_DROPDOWN__UI__MAX_HEIGHT",
				"--max-height",
				"ui.max_height",
			),
			options: options_source,
			value: detect_source(
				cli.select.is_some(),
				self.value.is_some(),
				"SELECT_DROPDOWN__VALUE",
				"--select",
				"value",
			),
		};

		let options = match self.options_file {
			Some(path) => options::load_file(&path)
				.with_context(|| format!("failed to load options from {}", path.display()))?,
			None => self.options.unwrap_or_default(),
		};
		let initial_ids = self
			.value
			.unwrap_or_default()
			.into_iter()
			.map(|id| canonical_id(&options, id))
			.collect();

		let config = ResolvedConfig {
			options,
			initial_ids,
			control: self.control.resolve(),
			ui: self.ui.finalize(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
