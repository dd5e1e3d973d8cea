//! Active-row movement over the filtered option list.

use crate::filter::FilteredOptions;
use crate::types::SelectOption;

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Next,
	Prev,
}

/// Moves the highlighted position with wraparound.
///
/// Positions always refer to the *filtered* list. With `skip_disabled` set,
/// disabled options are stepped over and never become active; otherwise they
/// can be highlighted but committing them has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationController {
	skip_disabled: bool,
}

impl Default for NavigationController {
	fn default() -> Self {
		Self::new(true)
	}
}

impl NavigationController {
	#[must_use]
	pub const fn new(skip_disabled: bool) -> Self {
		Self { skip_disabled }
	}

	#[must_use]
	pub const fn skips_disabled(&self) -> bool {
		self.skip_disabled
	}

	/// Whether `option` may become the active entry.
	#[must_use]
	pub fn is_navigable(&self, option: &SelectOption) -> bool {
		!(self.skip_disabled && option.disabled)
	}

	/// Move one step from `active` in `direction`.
	///
	/// Without an active entry, `Next` lands on the first navigable entry and
	/// `Prev` on the last. Out-of-range positions count as no active entry.
	#[must_use]
	pub fn step(
		&self,
		active: Option<usize>,
		filtered: FilteredOptions<'_>,
		direction: Direction,
	) -> Option<usize> {
		let len = filtered.len();
		if len == 0 {
			return None;
		}
		let start = active.filter(|&position| position < len);

		(1..=len)
			.map(|offset| match (start, direction) {
				(Some(position), Direction::Next) => (position + offset) % len,
				(Some(position), Direction::Prev) => (position + len - offset) % len,
				(None, Direction::Next) => offset - 1,
				(None, Direction::Prev) => len - offset,
			})
			.find(|&candidate| self.navigable_at(filtered, candidate))
	}

	/// First navigable position, if any.
	#[must_use]
	pub fn first(&self, filtered: FilteredOptions<'_>) -> Option<usize> {
		self.step(None, filtered, Direction::Next)
	}

	/// Last navigable position, if any.
	#[must_use]
	pub fn last(&self, filtered: FilteredOptions<'_>) -> Option<usize> {
		self.step(None, filtered, Direction::Prev)
	}

	/// Keep `active` only when it still points at a navigable entry.
	#[must_use]
	pub fn sanitize(&self, active: Option<usize>, filtered: FilteredOptions<'_>) -> Option<usize> {
		active.filter(|&position| self.navigable_at(filtered, position))
	}

	/// Option under the active position, or `None` when nothing is highlighted.
	#[must_use]
	pub fn commit_active<'a>(
		&self,
		active: Option<usize>,
		filtered: FilteredOptions<'a>,
	) -> Option<&'a SelectOption> {
		filtered.get(active?)
	}

	fn navigable_at(&self, filtered: FilteredOptions<'_>, position: usize) -> bool {
		filtered
			.get(position)
			.is_some_and(|option| self.is_navigable(option))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn options(disabled: &[bool]) -> Vec<SelectOption> {
		disabled
			.iter()
			.enumerate()
			.map(|(index, &disabled)| {
				let option = SelectOption::new(index as i64, format!("Option {index}"));
				if disabled { option.disabled() } else { option }
			})
			.collect()
	}

	fn all(options: &[SelectOption]) -> Vec<usize> {
		(0..options.len()).collect()
	}

	#[test]
	fn empty_list_never_has_an_active_entry() {
		let nav = NavigationController::default();
		let view = FilteredOptions::new(&[], &[]);
		assert_eq!(nav.step(None, view, Direction::Next), None);
		assert_eq!(nav.step(Some(0), view, Direction::Prev), None);
		assert_eq!(nav.first(view), None);
		assert_eq!(nav.commit_active(Some(0), view), None);
	}

	#[test]
	fn steps_wrap_around_both_ends() {
		let options = options(&[false, false, false]);
		let indices = all(&options);
		let view = FilteredOptions::new(&options, &indices);
		let nav = NavigationController::default();

		assert_eq!(nav.step(Some(2), view, Direction::Next), Some(0));
		assert_eq!(nav.step(Some(0), view, Direction::Prev), Some(2));
		assert_eq!(nav.step(Some(0), view, Direction::Next), Some(1));
	}

	#[test]
	fn starting_without_active_entry_picks_an_end() {
		let options = options(&[false, false, false]);
		let indices = all(&options);
		let view = FilteredOptions::new(&options, &indices);
		let nav = NavigationController::default();

		assert_eq!(nav.step(None, view, Direction::Next), Some(0));
		assert_eq!(nav.step(None, view, Direction::Prev), Some(2));
		assert_eq!(nav.step(Some(99), view, Direction::Next), Some(0));
	}

	#[test]
	fn disabled_entries_are_skipped_by_default() {
		let options = options(&[true, false, true, false, true]);
		let indices = all(&options);
		let view = FilteredOptions::new(&options, &indices);
		let nav = NavigationController::default();

		assert_eq!(nav.first(view), Some(1));
		assert_eq!(nav.last(view), Some(3));
		assert_eq!(nav.step(Some(1), view, Direction::Next), Some(3));
		assert_eq!(nav.step(Some(3), view, Direction::Next), Some(1));
		assert_eq!(nav.step(Some(1), view, Direction::Prev), Some(3));
	}

	#[test]
	fn disabled_entries_stay_indexable_when_not_skipping() {
		let options = options(&[true, false, true]);
		let indices = all(&options);
		let view = FilteredOptions::new(&options, &indices);
		let nav = NavigationController::new(false);

		assert_eq!(nav.first(view), Some(0));
		assert_eq!(nav.step(Some(0), view, Direction::Next), Some(1));
		assert_eq!(nav.step(Some(1), view, Direction::Next), Some(2));
		assert_eq!(nav.step(Some(2), view, Direction::Next), Some(0));
	}

	#[test]
	fn fully_disabled_list_has_no_navigable_entry() {
		let options = options(&[true, true]);
		let indices = all(&options);
		let view = FilteredOptions::new(&options, &indices);
		let nav = NavigationController::default();

		assert_eq!(nav.first(view), None);
		assert_eq!(nav.step(Some(0), view, Direction::Next), None);
	}

	#[test]
	fn wraparound_holds_for_every_list_length() {
		let nav = NavigationController::default();
		for len in 1..8 {
			let options = options(&vec![false; len]);
			let indices = all(&options);
			let view = FilteredOptions::new(&options, &indices);
			let first = nav.first(view);
			let last = nav.last(view);
			assert_eq!(nav.step(last, view, Direction::Next), first);
			assert_eq!(nav.step(first, view, Direction::Prev), last);
		}
	}

	#[test]
	fn positions_follow_the_filtered_order() {
		let options = options(&[false, false, false, false]);
		let indices = vec![3, 1];
		let view = FilteredOptions::new(&options, &indices);
		let nav = NavigationController::default();

		let active = nav.first(view);
		assert_eq!(active, Some(0));
		assert_eq!(
			nav.commit_active(active, view).map(|option| option.label.as_str()),
			Some("Option 3")
		);
		assert_eq!(nav.sanitize(Some(5), view), None);
	}
}
