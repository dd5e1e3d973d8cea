//! The dropdown state machine.
//!
//! [`DropdownController`] owns the open/closed state, the filter query and the
//! active row, and routes every input through the filter, navigation and
//! selection components. All transitions run synchronously inside the method
//! that triggered them.

use std::fmt;

use tracing::{debug, trace};

use crate::collaborators::{FocusScope, Positioner};
use crate::filter::{FilterEngine, FilteredOptions, is_blank};
use crate::navigation::{Direction, NavigationController};
use crate::selection::{SelectionModel, SelectionOutcome};
use crate::types::{OptionId, SelectOption, SelectionMode, Value};
use crate::view::DropdownView;

/// Callback receiving every committed value.
pub type ChangeHandler = Box<dyn FnMut(&Value)>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenState {
	Open,
	#[default]
	Closed,
}

/// Why the popover was closed without a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
	Escape,
	OutsideClick,
	Blur,
	/// The trigger was activated again while open.
	Trigger,
}

/// Input understood by [`DropdownController::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
	/// Primary activation of the trigger: opens when closed, closes when open.
	Toggle,
	Open,
	Dismiss(DismissReason),
	SetQuery(String),
	PushQuery(char),
	PopQuery,
	ClearQuery,
	Navigate(Direction),
	NavigateFirst,
	NavigateLast,
	CommitActive,
	/// Pointer pick of a visible option.
	Select(OptionId),
	/// Inline removal of a selected option.
	Remove(OptionId),
	RemoveLast,
}

/// Behavioural configuration of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownConfig {
	pub mode: SelectionMode,
	pub with_search: bool,
	pub disabled: bool,
	/// Step over disabled options while navigating.
	pub skip_disabled: bool,
}

impl Default for DropdownConfig {
	fn default() -> Self {
		Self {
			mode: SelectionMode::Single,
			with_search: true,
			disabled: false,
			skip_disabled: true,
		}
	}
}

impl DropdownConfig {
	#[must_use]
	pub fn single() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn multiple() -> Self {
		Self {
			mode: SelectionMode::Multiple,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_search(mut self, enabled: bool) -> Self {
		self.with_search = enabled;
		self
	}

	#[must_use]
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	#[must_use]
	pub fn skip_disabled(mut self, skip: bool) -> Self {
		self.skip_disabled = skip;
		self
	}
}

pub struct DropdownController<P = (), F = ()> {
	options: Vec<SelectOption>,
	config: DropdownConfig,
	filter: FilterEngine,
	navigation: NavigationController,
	selection: SelectionModel,
	state: OpenState,
	query: String,
	active: Option<usize>,
	filtered: Vec<usize>,
	on_change: Option<ChangeHandler>,
	positioner: P,
	focus: F,
}

impl<P: fmt::Debug, F: fmt::Debug> fmt::Debug for DropdownController<P, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DropdownController")
			.field("options", &self.options.len())
			.field("config", &self.config)
			.field("state", &self.state)
			.field("query", &self.query)
			.field("active", &self.active)
			.field("filtered", &self.filtered)
			.field("value", self.selection.value())
			.field("on_change", &self.on_change.is_some())
			.field("positioner", &self.positioner)
			.field("focus", &self.focus)
			.finish()
	}
}

impl DropdownController {
	/// Controller without positioning or focus collaborators.
	#[must_use]
	pub fn new(options: Vec<SelectOption>, config: DropdownConfig) -> Self {
		Self::with_collaborators(options, config, (), ())
	}
}

impl<P: Positioner, F: FocusScope> DropdownController<P, F> {
	#[must_use]
	pub fn with_collaborators(
		options: Vec<SelectOption>,
		config: DropdownConfig,
		positioner: P,
		focus: F,
	) -> Self {
		let filter = FilterEngine::new(config.with_search);
		let filtered = filter.filter(&options, "");
		Self {
			options,
			filter,
			navigation: NavigationController::new(config.skip_disabled),
			selection: SelectionModel::new(config.mode, Value::None),
			config,
			state: OpenState::Closed,
			query: String::new(),
			active: None,
			filtered,
			on_change: None,
			positioner,
			focus,
		}
	}

	/// Seed the current value. Mismatched shapes are normalized to the mode.
	#[must_use]
	pub fn with_value(mut self, value: Value) -> Self {
		self.selection.replace(value);
		self
	}

	/// Install the change callback. Without one the control is read-only.
	#[must_use]
	pub fn on_change(mut self, handler: impl FnMut(&Value) + 'static) -> Self {
		self.on_change = Some(Box::new(handler));
		self
	}

	pub fn set_on_change(&mut self, handler: Option<ChangeHandler>) {
		self.on_change = handler;
	}

	/// Route an input event. Returns `true` when it caused a transition.
	pub fn dispatch(&mut self, event: DropdownEvent) -> bool {
		trace!(?event, "dispatch");
		match event {
			DropdownEvent::Toggle => self.toggle_open(),
			DropdownEvent::Open => self.open(),
			DropdownEvent::Dismiss(reason) => self.dismiss(reason),
			DropdownEvent::SetQuery(query) => self.set_query(query),
			DropdownEvent::PushQuery(ch) => self.push_query(ch),
			DropdownEvent::PopQuery => self.pop_query(),
			DropdownEvent::ClearQuery => self.clear_query(),
			DropdownEvent::Navigate(direction) => self.navigate(direction),
			DropdownEvent::NavigateFirst => self.navigate_first(),
			DropdownEvent::NavigateLast => self.navigate_last(),
			DropdownEvent::CommitActive => self.commit_active(),
			DropdownEvent::Select(id) => self.select(&id),
			DropdownEvent::Remove(id) => self.remove(&id),
			DropdownEvent::RemoveLast => self.remove_last(),
		}
	}

	pub fn toggle_open(&mut self) -> bool {
		if self.is_open() {
			self.dismiss(DismissReason::Trigger)
		} else {
			self.open()
		}
	}

	/// Open the popover. Ignored while disabled or already open.
	///
	/// The active row starts on the first selected option that is visible and
	/// navigable, or on nothing.
	pub fn open(&mut self) -> bool {
		if self.config.disabled {
			trace!("ignoring open request on disabled control");
			return false;
		}
		if self.is_open() {
			return false;
		}

		self.state = OpenState::Open;
		self.query.clear();
		self.refilter();
		self.active = self.reset_active();
		self.positioner.set_open(true);
		self.focus.acquire();
		debug!(active = ?self.active, visible = self.filtered.len(), "dropdown opened");
		true
	}

	/// Close without changing the value.
	pub fn dismiss(&mut self, reason: DismissReason) -> bool {
		if !self.is_open() {
			return false;
		}
		self.close();
		debug!(?reason, "dropdown dismissed");
		true
	}

	/// Replace the filter query. Ignored while closed or when search is off.
	///
	/// A non-blank query moves the active row to the first navigable match; a
	/// blank one restores the row chosen on open.
	pub fn set_query(&mut self, query: impl Into<String>) -> bool {
		if !self.accepts_query() {
			return false;
		}
		let query = query.into();
		if query == self.query {
			return false;
		}

		self.query = query;
		self.refilter();
		self.active = self.reset_active();
		trace!(query = %self.query, visible = self.filtered.len(), "query updated");
		true
	}

	pub fn push_query(&mut self, ch: char) -> bool {
		let mut query = self.query.clone();
		query.push(ch);
		self.set_query(query)
	}

	pub fn pop_query(&mut self) -> bool {
		let mut query = self.query.clone();
		if query.pop().is_none() {
			return false;
		}
		self.set_query(query)
	}

	pub fn clear_query(&mut self) -> bool {
		self.set_query(String::new())
	}

	pub fn navigate(&mut self, direction: Direction) -> bool {
		if !self.accepts_input() {
			return false;
		}
		self.active = self.navigation.step(self.active, self.filtered(), direction);
		trace!(?direction, active = ?self.active, "navigated");
		true
	}

	pub fn navigate_first(&mut self) -> bool {
		if !self.accepts_input() {
			return false;
		}
		self.active = self.navigation.first(self.filtered());
		true
	}

	pub fn navigate_last(&mut self) -> bool {
		if !self.accepts_input() {
			return false;
		}
		self.active = self.navigation.last(self.filtered());
		true
	}

	/// Pick the option under the active row. No-op when nothing is active.
	pub fn commit_active(&mut self) -> bool {
		if !self.accepts_input() {
			return false;
		}
		let Some(option) = self
			.navigation
			.commit_active(self.active, self.filtered())
			.cloned()
		else {
			return false;
		};
		self.pick(&option)
	}

	/// Pick a visible option by id, as a pointer click on its row would.
	///
	/// The active row is left alone; a single mode pick closes the popover
	/// and clears it anyway.
	pub fn select(&mut self, id: &OptionId) -> bool {
		if !self.accepts_input() {
			return false;
		}
		let filtered = self.filtered();
		let Some(position) = filtered.position_of(id) else {
			return false;
		};
		let Some(option) = filtered.get(position).cloned() else {
			return false;
		};
		self.pick(&option)
	}

	/// Remove a selected option. Does not change the open state.
	///
	/// In single mode any known option id clears the value.
	pub fn remove(&mut self, id: &OptionId) -> bool {
		if self.config.disabled {
			return false;
		}
		let option = self
			.selection
			.value()
			.selected()
			.iter()
			.chain(self.options.iter())
			.find(|option| &option.id == id)
			.cloned();
		let Some(option) = option else {
			return false;
		};
		if self.mode() == SelectionMode::Multiple && !self.selection.is_selected(id) {
			return false;
		}
		let outcome = self.selection.remove(&option);
		self.apply(outcome)
	}

	pub fn remove_last(&mut self) -> bool {
		let Some(id) = self.selection.value().ids().last().cloned() else {
			return false;
		};
		self.remove(&id)
	}

	/// Replace the option set. The value is kept even if it no longer matches.
	pub fn set_options(&mut self, options: Vec<SelectOption>) {
		self.options = options;
		self.refilter();
		self.active = self.reset_active();
		if self.is_open() {
			self.positioner.invalidate();
		}
	}

	/// Feed back a value from the owner of the control.
	pub fn set_value(&mut self, value: Value) {
		self.selection.replace(value);
	}

	/// Disabling an open control closes it.
	pub fn set_disabled(&mut self, disabled: bool) {
		self.config.disabled = disabled;
		if disabled && self.is_open() {
			self.close();
			debug!("dropdown closed because the control was disabled");
		}
	}

	#[must_use]
	pub fn view(&self) -> DropdownView<'_> {
		DropdownView {
			open: self.is_open(),
			disabled: self.config.disabled,
			read_only: self.is_read_only(),
			mode: self.mode(),
			with_search: self.config.with_search,
			query: &self.query,
			active: self.active,
			filtered: self.filtered(),
			value: self.selection.value(),
		}
	}

	#[must_use]
	pub fn filtered(&self) -> FilteredOptions<'_> {
		FilteredOptions::new(&self.options, &self.filtered)
	}

	#[must_use]
	pub fn options(&self) -> &[SelectOption] {
		&self.options
	}

	#[must_use]
	pub fn config(&self) -> &DropdownConfig {
		&self.config
	}

	#[must_use]
	pub fn mode(&self) -> SelectionMode {
		self.selection.mode()
	}

	#[must_use]
	pub fn state(&self) -> OpenState {
		self.state
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.state == OpenState::Open
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn active_index(&self) -> Option<usize> {
		self.active
	}

	#[must_use]
	pub fn active_option(&self) -> Option<&SelectOption> {
		self.filtered().get(self.active?)
	}

	#[must_use]
	pub fn value(&self) -> &Value {
		self.selection.value()
	}

	#[must_use]
	pub fn is_read_only(&self) -> bool {
		self.on_change.is_none()
	}

	pub fn positioner(&self) -> &P {
		&self.positioner
	}

	pub fn positioner_mut(&mut self) -> &mut P {
		&mut self.positioner
	}

	pub fn focus_scope(&self) -> &F {
		&self.focus
	}

	pub fn focus_scope_mut(&mut self) -> &mut F {
		&mut self.focus
	}

	fn accepts_input(&self) -> bool {
		self.is_open() && !self.config.disabled
	}

	fn accepts_query(&self) -> bool {
		self.accepts_input() && self.filter.enabled()
	}

	fn pick(&mut self, option: &SelectOption) -> bool {
		let outcome = self.selection.toggle(option);
		self.apply(outcome)
	}

	fn apply(&mut self, outcome: SelectionOutcome) -> bool {
		if !outcome.committed {
			trace!("selection request ignored");
			return false;
		}

		match self.on_change.as_mut() {
			Some(on_change) => {
				self.selection.replace(outcome.value);
				on_change(self.selection.value());
				debug!(selected = self.selection.value().len(), "value committed");
			}
			None => debug!("no change handler installed, value update dropped"),
		}

		if outcome.close_requested {
			self.close();
		} else if outcome.clear_query && !self.query.is_empty() {
			self.query.clear();
			self.refilter();
			self.active = self.reset_active();
		}
		true
	}

	fn close(&mut self) {
		self.state = OpenState::Closed;
		self.query.clear();
		self.active = None;
		self.refilter();
		self.positioner.set_open(false);
		self.focus.release();
	}

	fn refilter(&mut self) {
		self.filtered = self.filter.filter(&self.options, &self.query);
	}

	fn reset_active(&self) -> Option<usize> {
		if !self.is_open() {
			return None;
		}
		if is_blank(&self.query) {
			self.initial_active()
		} else {
			self.navigation.first(self.filtered())
		}
	}

	fn initial_active(&self) -> Option<usize> {
		let filtered = self.filtered();
		let position = self
			.selection
			.value()
			.ids()
			.find_map(|id| filtered.position_of(id))?;
		self.navigation.sanitize(Some(position), filtered)
	}
}

#[cfg(test)]
mod tests;
