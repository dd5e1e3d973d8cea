//! Focus trap and input routing for the terminal host.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use select_dropdown_core::{DismissReason, Direction, DropdownEvent, FocusScope, OptionId};

/// What an input asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
	Dropdown(DropdownEvent),
	/// Leave with the current value.
	Accept,
	/// Leave without accepting.
	Cancel,
}

/// Region under a pointer click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
	Trigger,
	ChipRemove(OptionId),
	Option(OptionId),
	/// Inside the popover but not on an option row.
	Popover,
	Outside,
}

/// Focus scope of the popover.
///
/// While trapped, keys drive the popover and clicks outside of it dismiss it.
/// Otherwise keys act on the closed trigger.
#[derive(Debug, Default)]
pub struct KeyScope {
	trapped: bool,
}

impl FocusScope for KeyScope {
	fn acquire(&mut self) {
		self.trapped = true;
	}

	fn release(&mut self) {
		self.trapped = false;
	}
}

impl KeyScope {
	#[must_use]
	pub fn is_trapped(&self) -> bool {
		self.trapped
	}

	#[must_use]
	pub fn map_key(&self, key: KeyEvent, with_search: bool) -> Option<KeyCommand> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		if ctrl && key.code == KeyCode::Char('c') {
			return Some(KeyCommand::Cancel);
		}

		if self.trapped {
			trapped_key(key, ctrl, with_search)
		} else {
			trigger_key(key)
		}
	}

	#[must_use]
	pub fn map_click(&self, hit: Hit) -> Option<KeyCommand> {
		let event = match hit {
			Hit::Trigger => DropdownEvent::Toggle,
			Hit::ChipRemove(id) => DropdownEvent::Remove(id),
			Hit::Option(id) if self.trapped => DropdownEvent::Select(id),
			Hit::Outside if self.trapped => DropdownEvent::Dismiss(DismissReason::OutsideClick),
			Hit::Option(_) | Hit::Popover | Hit::Outside => return None,
		};
		Some(KeyCommand::Dropdown(event))
	}
}

fn trigger_key(key: KeyEvent) -> Option<KeyCommand> {
	let event = match key.code {
		KeyCode::Enter => return Some(KeyCommand::Accept),
		KeyCode::Esc | KeyCode::Char('q') => return Some(KeyCommand::Cancel),
		KeyCode::Char(' ') | KeyCode::Down | KeyCode::Up => DropdownEvent::Open,
		KeyCode::Backspace | KeyCode::Delete => DropdownEvent::RemoveLast,
		_ => return None,
	};
	Some(KeyCommand::Dropdown(event))
}

fn trapped_key(key: KeyEvent, ctrl: bool, with_search: bool) -> Option<KeyCommand> {
	let event = match key.code {
		KeyCode::Up => DropdownEvent::Navigate(Direction::Prev),
		KeyCode::Down => DropdownEvent::Navigate(Direction::Next),
		KeyCode::Char('p') if ctrl => DropdownEvent::Navigate(Direction::Prev),
		KeyCode::Char('n') if ctrl => DropdownEvent::Navigate(Direction::Next),
		KeyCode::Char('u') if ctrl => DropdownEvent::ClearQuery,
		KeyCode::Home => DropdownEvent::NavigateFirst,
		KeyCode::End => DropdownEvent::NavigateLast,
		KeyCode::Enter => DropdownEvent::CommitActive,
		KeyCode::Esc => DropdownEvent::Dismiss(DismissReason::Escape),
		KeyCode::Tab | KeyCode::BackTab => DropdownEvent::Dismiss(DismissReason::Blur),
		KeyCode::Backspace if with_search => DropdownEvent::PopQuery,
		KeyCode::Char(' ') if !with_search => DropdownEvent::CommitActive,
		KeyCode::Char(ch)
			if with_search && !ctrl && !key.modifiers.contains(KeyModifiers::ALT) =>
		{
			DropdownEvent::PushQuery(ch)
		}
		_ => return None,
	};
	Some(KeyCommand::Dropdown(event))
}
