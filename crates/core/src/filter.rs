//! Case-insensitive substring filtering over option labels.

use crate::types::{OptionId, SelectOption};

/// Decides which options are visible for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterEngine {
	enabled: bool,
}

impl Default for FilterEngine {
	fn default() -> Self {
		Self::new(true)
	}
}

impl FilterEngine {
	#[must_use]
	pub const fn new(enabled: bool) -> Self {
		Self { enabled }
	}

	#[must_use]
	pub const fn enabled(&self) -> bool {
		self.enabled
	}

	/// Return the indices of `options` that remain visible for `query`.
	///
	/// A disabled engine or a blank query keeps every option. Otherwise an
	/// option is kept when its lowercased label contains the lowercased
	/// query. Source order is preserved.
	#[must_use]
	pub fn filter(&self, options: &[SelectOption], query: &str) -> Vec<usize> {
		if !self.enabled || is_blank(query) {
			return (0..options.len()).collect();
		}

		let needle = query.to_lowercase();
		options
			.iter()
			.enumerate()
			.filter(|(_, option)| label_contains(&option.label, &needle))
			.map(|(index, _)| index)
			.collect()
	}
}

/// `true` when the query is empty or whitespace only.
#[must_use]
pub fn is_blank(query: &str) -> bool {
	query.trim().is_empty()
}

fn label_contains(label: &str, lowercase_needle: &str) -> bool {
	label.to_lowercase().contains(lowercase_needle)
}

/// Borrowed view over the visible options, in display order.
#[derive(Debug, Clone, Copy)]
pub struct FilteredOptions<'a> {
	source: &'a [SelectOption],
	indices: &'a [usize],
}

impl<'a> FilteredOptions<'a> {
	/// Pair the full option set with indices produced by [`FilterEngine::filter`].
	///
	/// Indices that fall outside `source` are ignored by every accessor.
	#[must_use]
	pub const fn new(source: &'a [SelectOption], indices: &'a [usize]) -> Self {
		Self { source, indices }
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.indices.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	/// Option at display position `position`.
	#[must_use]
	pub fn get(&self, position: usize) -> Option<&'a SelectOption> {
		let index = *self.indices.get(position)?;
		self.source.get(index)
	}

	/// Display position of the option with the given id, if visible.
	#[must_use]
	pub fn position_of(&self, id: &OptionId) -> Option<usize> {
		self.iter().position(|option| &option.id == id)
	}

	pub fn iter(self) -> impl Iterator<Item = &'a SelectOption> {
		let source = self.source;
		self.indices
			.iter()
			.filter_map(move |&index| source.get(index))
	}

	/// Size of the unfiltered option set.
	#[must_use]
	pub fn source_len(&self) -> usize {
		self.source.len()
	}
}
