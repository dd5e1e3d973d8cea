//! File backed `tracing` setup.
//!
//! The terminal belongs to the dropdown while it runs, so records are written
//! to `select-dropdown.log` in the data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::app_dirs;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "SELECT_DROPDOWN_LOG";
pub const LOG_FILE: &str = "select-dropdown.log";

const DEFAULT_FILTER: &str = "select_dropdown=info,select_dropdown_core=info,warn";

/// Build the filter from an explicit directive, `SELECT_DROPDOWN_LOG`, or the
/// default, in that order.
pub fn filter_from(directive: Option<&str>) -> EnvFilter {
	match directive {
		Some(directive) => EnvFilter::new(directive),
		None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
	}
}

/// Install the global subscriber writing into the data directory.
///
/// Returns the path of the log file.
pub fn initialize(directive: Option<&str>) -> Result<PathBuf> {
	let dir = app_dirs::get_data_dir()?;
	initialize_in(&dir, filter_from(directive))
}

pub fn initialize_in(dir: &Path, filter: EnvFilter) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.with_thread_ids(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}
