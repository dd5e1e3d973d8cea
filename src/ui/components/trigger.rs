use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use select_dropdown_core::{DropdownView, OptionId, TriggerSummary};

use super::{OptionLabeler, clamp_u16, line_width};
use crate::ui::config::UiConfig;
use crate::ui::style::Theme;

const CHIP_REMOVE: &str = "✕";
const INDICATOR_OPEN: &str = "▴";
const INDICATOR_CLOSED: &str = "▾";

pub struct TriggerContext<'a> {
	pub view: DropdownView<'a>,
	pub ui: &'a UiConfig,
	pub theme: &'a Theme,
	pub labeler: OptionLabeler<'a>,
}

/// Draw the trigger into `area`.
///
/// Returns the cell of the chip's remove marker when one was drawn.
pub fn render_trigger(
	frame: &mut Frame,
	area: Rect,
	ctx: TriggerContext<'_>,
) -> Option<(Rect, OptionId)> {
	let TriggerContext {
		view,
		ui,
		theme,
		labeler,
	} = ctx;

	let border_style = if view.disabled {
		theme.disabled
	} else {
		theme.border_style(view.open)
	};
	let borders = if ui.outlined {
		Borders::ALL
	} else {
		Borders::BOTTOM
	};
	let mut block = Block::new().borders(borders).border_style(border_style);
	if let Some(title) = ui.title.as_deref() {
		block = if ui.outlined {
			block.title(title.to_string())
		} else {
			block.title_bottom(title.to_string())
		};
	}
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let [content_area, indicator_area] =
		Layout::horizontal([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

	let indicator = if view.open {
		INDICATOR_OPEN
	} else {
		INDICATOR_CLOSED
	};
	frame.render_widget(
		Paragraph::new(indicator).style(border_style),
		indicator_area,
	);

	let mut chip_remove = None;
	let line = match view.summary() {
		TriggerSummary::Placeholder => Line::styled(ui.placeholder.clone(), theme.placeholder),
		TriggerSummary::Single(option) => labeler.line(option),
		TriggerSummary::Count(count) => Line::raw(format!("{count} selected")),
		TriggerSummary::Chip(option) => {
			let mut line = labeler.line(option).patch_style(theme.chip);
			let label_width = clamp_u16(line_width(&line));
			let marker_x = content_area.x.saturating_add(label_width).saturating_add(1);
			if !view.disabled && marker_x < content_area.right() && content_area.height > 0 {
				chip_remove = Some((
					Rect::new(marker_x, content_area.y, 1, 1),
					option.id.clone(),
				));
			}
			line.spans.push(Span::raw(" "));
			line.spans
				.push(Span::styled(CHIP_REMOVE, theme.chip_remove));
			line
		}
	};
	let line = if view.disabled {
		line.patch_style(theme.disabled)
	} else {
		line
	};
	frame.render_widget(Paragraph::new(line), content_area);

	chip_remove
}
