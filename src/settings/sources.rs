use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use select_dropdown::app_dirs;
use tracing::debug;

use crate::cli::CliArgs;

pub(crate) const ENV_PREFIX: &str = "SELECT_DROPDOWN";
pub(crate) const ENV_SEPARATOR: &str = "__";

/// Keys whose environment values are comma separated lists. Everything else
/// is read as a single scalar, so labels and paths may contain commas.
const ENV_LIST_KEYS: &[&str] = &["value"];

/// Merge default files, `--config` files and the environment, in that order
/// of increasing precedence.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	debug!(defaults = ?defaults, explicit = ?cli.config, "merging configuration files");

	let optional = defaults
		.into_iter()
		.map(|path| File::from(path).required(false));
	let explicit = cli
		.config
		.iter()
		.map(|path| File::from(path.as_path()).required(true));

	optional
		.chain(explicit)
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(environment())
		.build()
		.context("failed to merge configuration sources")
}

/// `SELECT_DROPDOWN__SECTION__KEY` variables. Scalars are parsed as booleans
/// or numbers where possible.
pub(super) fn environment() -> Environment {
	ENV_LIST_KEYS.iter().fold(
		Environment::with_prefix(ENV_PREFIX)
			.separator(ENV_SEPARATOR)
			.try_parsing(true)
			.list_separator(","),
		|environment, key| environment.with_list_parse_key(key),
	)
}

/// Default configuration file locations, lowest precedence first.
pub(crate) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".select-dropdown.toml"));
		files.push(current_dir.join("select-dropdown.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;
	use tempfile::Builder;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".select-dropdown.toml")));
		assert!(files.iter().any(|path| path.ends_with("select-dropdown.toml")));
	}

	#[test]
	fn explicit_config_files_are_merged() {
		let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(file, "[ui]\nmax_height = 4\n\n[control]\nmultiple = true").unwrap();
		let path = file.path().to_str().unwrap().to_string();

		let cli = CliArgs::parse_from([
			"select-dropdown",
			"--no-config",
			"--config",
			path.as_str(),
		]);
		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_int("ui.max_height").unwrap(), 4);
		assert!(config.get_bool("control.multiple").unwrap());
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let cli = CliArgs::parse_from([
			"select-dropdown",
			"--no-config",
			"--config",
			"/definitely/not/here.toml",
		]);
		assert!(build_config(&cli).is_err());
	}
}
