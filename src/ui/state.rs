use ratatui::layout::{Position, Rect};
use ratatui::text::Line;
use ratatui::widgets::ListState;
use select_dropdown_core::{DropdownController, FilteredOptions, OptionId, SelectOption};

use super::config::UiConfig;
use super::keymap::{Hit, KeyScope};
use super::outcome::DropdownOutcome;
use super::popover::PopoverPositioner;
use super::style::Theme;

/// Custom renderer for option labels, replacing [`LabelFormat`](super::LabelFormat).
pub type LabelDelegate = Box<dyn Fn(&SelectOption) -> Line<'static>>;

pub type TerminalController = DropdownController<PopoverPositioner, KeyScope>;

/// Screen regions recorded during the last draw, used for pointer input.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitAreas {
	pub(crate) trigger: Rect,
	pub(crate) chip_remove: Option<(Rect, OptionId)>,
	pub(crate) popover: Option<Rect>,
	pub(crate) list: Option<Rect>,
	pub(crate) list_offset: usize,
}

impl HitAreas {
	pub(crate) fn hit(&self, position: Position, filtered: FilteredOptions<'_>) -> Hit {
		if let Some((area, id)) = &self.chip_remove
			&& area.contains(position)
		{
			return Hit::ChipRemove(id.clone());
		}
		if let Some(list) = self.list
			&& list.contains(position)
		{
			let row = usize::from(position.y - list.y) + self.list_offset;
			return match filtered.get(row) {
				Some(option) => Hit::Option(option.id.clone()),
				None => Hit::Popover,
			};
		}
		if self.popover.is_some_and(|popover| popover.contains(position)) {
			return Hit::Popover;
		}
		if self.trigger.contains(position) {
			return Hit::Trigger;
		}
		Hit::Outside
	}
}

/// Terminal application state: the controller plus everything the renderer
/// keeps between frames.
pub struct App {
	pub(crate) controller: TerminalController,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) option_label: Option<LabelDelegate>,
	pub(crate) list_state: ListState,
	pub(crate) hits: HitAreas,
}

impl App {
	pub fn new(controller: TerminalController, ui: UiConfig) -> Self {
		Self {
			controller,
			ui,
			theme: Theme::default(),
			option_label: None,
			list_state: ListState::default(),
			hits: HitAreas::default(),
		}
	}

	#[must_use]
	pub fn controller(&self) -> &TerminalController {
		&self.controller
	}

	pub fn controller_mut(&mut self) -> &mut TerminalController {
		&mut self.controller
	}

	#[must_use]
	pub fn ui(&self) -> &UiConfig {
		&self.ui
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_option_label(&mut self, delegate: Option<LabelDelegate>) {
		self.option_label = delegate;
	}

	pub(crate) fn outcome(&self, accepted: bool) -> DropdownOutcome {
		DropdownOutcome {
			accepted,
			value: self.controller.value().clone(),
		}
	}

	/// Mirror the controller's active row into the list widget state.
	pub(crate) fn sync_list_state(&mut self) {
		self.list_state.select(self.controller.active_index());
		if !self.controller.is_open() {
			*self.list_state.offset_mut() = 0;
		}
	}
}
