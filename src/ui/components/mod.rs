//! Widgets drawn by the terminal host.

/// Popover list, search line and empty states.
pub mod list;
/// The closed control.
pub mod trigger;

use ratatui::text::{Line, Span};
use select_dropdown_core::SelectOption;
use unicode_width::UnicodeWidthStr;

pub use list::{HIGHLIGHT_SYMBOL, PopoverContext, popover_size, render_popover};
pub use trigger::{TriggerContext, render_trigger};

use super::config::LabelFormat;
use super::state::LabelDelegate;

/// Turns options into display lines, through the custom delegate when one is
/// installed.
#[derive(Clone, Copy)]
pub struct OptionLabeler<'a> {
	pub format: LabelFormat,
	pub delegate: Option<&'a LabelDelegate>,
}

impl<'a> OptionLabeler<'a> {
	#[must_use]
	pub fn new(format: LabelFormat, delegate: Option<&'a LabelDelegate>) -> Self {
		Self { format, delegate }
	}

	#[must_use]
	pub fn line(&self, option: &SelectOption) -> Line<'static> {
		if let Some(delegate) = self.delegate {
			return delegate(option);
		}
		match (self.format, option.icon.as_deref()) {
			(LabelFormat::Icon, Some(icon)) => Line::from(vec![
				Span::raw(icon.to_string()),
				Span::raw(" "),
				Span::raw(option.label.clone()),
			]),
			(LabelFormat::Id, _) => Line::from(vec![
				Span::raw(option.label.clone()),
				Span::raw(format!(" ({})", option.id)),
			]),
			_ => Line::raw(option.label.clone()),
		}
	}
}

/// Display width of a line in terminal cells.
pub(crate) fn line_width(line: &Line<'_>) -> usize {
	line.spans
		.iter()
		.map(|span| UnicodeWidthStr::width(span.content.as_ref()))
		.sum()
}

pub(crate) fn clamp_u16(value: usize) -> u16 {
	u16::try_from(value).unwrap_or(u16::MAX)
}
