//! Read-only snapshot of a controller, consumed by renderers.

use crate::filter::FilteredOptions;
use crate::types::{SelectOption, SelectionMode, Value};

/// What the popover list area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
	Results,
	/// The control has no options at all.
	NoOptions,
	/// Options exist but none match the current query.
	NoMatches,
}

/// What the closed control (the trigger) should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSummary<'a> {
	Placeholder,
	/// Single mode selection.
	Single(&'a SelectOption),
	/// The only selection of a multiple mode control, shown with a remove
	/// control.
	Chip(&'a SelectOption),
	/// Two or more selections in multiple mode.
	Count(usize),
}

/// One visible row of the popover list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRow<'a> {
	pub position: usize,
	pub option: &'a SelectOption,
	pub active: bool,
	pub selected: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DropdownView<'a> {
	pub open: bool,
	pub disabled: bool,
	pub read_only: bool,
	pub mode: SelectionMode,
	pub with_search: bool,
	pub query: &'a str,
	pub active: Option<usize>,
	pub filtered: FilteredOptions<'a>,
	pub value: &'a Value,
}

impl<'a> DropdownView<'a> {
	#[must_use]
	pub fn status(&self) -> ListStatus {
		if self.filtered.source_len() == 0 {
			ListStatus::NoOptions
		} else if self.filtered.is_empty() {
			ListStatus::NoMatches
		} else {
			ListStatus::Results
		}
	}

	#[must_use]
	pub fn summary(&self) -> TriggerSummary<'a> {
		match (self.mode, self.value.selected()) {
			(_, []) => TriggerSummary::Placeholder,
			(SelectionMode::Single, [first, ..]) => TriggerSummary::Single(first),
			(SelectionMode::Multiple, [only]) => TriggerSummary::Chip(only),
			(SelectionMode::Multiple, selected) => TriggerSummary::Count(selected.len()),
		}
	}

	#[must_use]
	pub fn is_selected(&self, option: &SelectOption) -> bool {
		self.value.contains(&option.id)
	}

	#[must_use]
	pub fn active_option(&self) -> Option<&'a SelectOption> {
		self.filtered.get(self.active?)
	}

	pub fn rows(self) -> impl Iterator<Item = OptionRow<'a>> {
		let active = self.active;
		let value = self.value;
		self.filtered
			.iter()
			.enumerate()
			.map(move |(position, option)| OptionRow {
				position,
				option,
				active: active == Some(position),
				selected: value.contains(&option.id),
			})
	}
}
