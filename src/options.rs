//! Loading option sets from labels and JSON files.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use select_dropdown_core::{OptionId, SelectOption};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
	#[error("failed to read options file {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to parse options from {origin}")]
	Parse {
		origin: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("duplicate option id `{0}`")]
	DuplicateId(OptionId),
}

/// Build options from bare labels, numbering ids from 1 in the given order.
/// Blank labels are skipped.
pub fn from_labels<I, S>(labels: I) -> Vec<SelectOption>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	labels
		.into_iter()
		.filter_map(|label| {
			let label = label.as_ref().trim();
			(!label.is_empty()).then(|| label.to_string())
		})
		.zip(1_i64..)
		.map(|(label, id)| SelectOption::new(id, label))
		.collect()
}

/// Parse a JSON array of `{ "id", "label", "icon"?, "disabled"? }` objects.
pub fn parse_json(text: &str, origin: impl Into<String>) -> Result<Vec<SelectOption>, OptionsError> {
	let options: Vec<SelectOption> =
		serde_json::from_str(text).map_err(|source| OptionsError::Parse {
			origin: origin.into(),
			source,
		})?;
	ensure_unique_ids(&options)?;
	Ok(options)
}

pub fn load_file(path: &Path) -> Result<Vec<SelectOption>, OptionsError> {
	let text = fs::read_to_string(path).map_err(|source| OptionsError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	parse_json(&text, path.display().to_string())
}

pub fn ensure_unique_ids(options: &[SelectOption]) -> Result<(), OptionsError> {
	let mut seen = HashSet::new();
	for option in options {
		if !seen.insert(&option.id) {
			return Err(OptionsError::DuplicateId(option.id.clone()));
		}
	}
	Ok(())
}
