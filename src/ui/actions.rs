use anyhow::Result;
use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tracing::trace;

use super::App;
use super::keymap::KeyCommand;
use super::outcome::DropdownOutcome;

impl App {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<DropdownOutcome>> {
		let with_search = self.controller.config().with_search;
		let command = self.controller.focus_scope().map_key(key, with_search);
		Ok(command.and_then(|command| self.apply_command(command)))
	}

	/// Route a left click through the areas recorded by the last draw.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Option<DropdownOutcome>> {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return Ok(None);
		}
		let position = Position::new(mouse.column, mouse.row);
		let hit = self.hits.hit(position, self.controller.filtered());
		trace!(?hit, "pointer down");
		let command = self.controller.focus_scope().map_click(hit);
		Ok(command.and_then(|command| self.apply_command(command)))
	}

	fn apply_command(&mut self, command: KeyCommand) -> Option<DropdownOutcome> {
		match command {
			KeyCommand::Accept => Some(self.outcome(true)),
			KeyCommand::Cancel => Some(self.outcome(false)),
			KeyCommand::Dropdown(event) => {
				if self.controller.dispatch(event) {
					self.sync_list_state();
				}
				None
			}
		}
	}
}
