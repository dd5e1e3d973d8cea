//! Fixed palette of the terminal renderer.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
	pub border: Style,
	pub border_focused: Style,
	pub placeholder: Style,
	pub disabled: Style,
	pub row_highlight: Style,
	pub selected_mark: Style,
	pub chip: Style,
	pub chip_remove: Style,
	pub query: Style,
	pub empty: Style,
	pub hint: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			border: Style::new().fg(Color::DarkGray),
			border_focused: Style::new().fg(Color::Blue),
			placeholder: Style::new().fg(Color::DarkGray),
			disabled: Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM),
			row_highlight: Style::new().bg(Color::Blue).fg(Color::White),
			selected_mark: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
			chip: Style::new().bg(Color::DarkGray).fg(Color::White),
			chip_remove: Style::new().fg(Color::Red),
			query: Style::new().add_modifier(Modifier::BOLD),
			empty: Style::new().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
			hint: Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
		}
	}
}

impl Theme {
	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		if focused {
			self.border_focused
		} else {
			self.border
		}
	}
}
