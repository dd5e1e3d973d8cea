use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect, Size};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, HighlightSpacing, List, ListItem, ListState, Paragraph};
use select_dropdown_core::{DropdownView, ListStatus};
use unicode_width::UnicodeWidthStr;

use super::{OptionLabeler, clamp_u16, line_width};
use crate::ui::config::UiConfig;
use crate::ui::style::Theme;

pub const HIGHLIGHT_SYMBOL: &str = "▶ ";
const SELECTED_MARK: &str = " ✓";
const SEARCH_PROMPT: &str = "> ";
const BORDER_CELLS: u16 = 2;

pub struct PopoverContext<'a> {
	pub view: DropdownView<'a>,
	pub ui: &'a UiConfig,
	pub theme: &'a Theme,
	pub labeler: OptionLabeler<'a>,
}

/// Natural size of the popover including borders, before placement clips it.
#[must_use]
pub fn popover_size(ctx: &PopoverContext<'_>) -> Size {
	let PopoverContext {
		view, ui, labeler, ..
	} = ctx;

	let (rows, body_width) = match view.status() {
		ListStatus::Results => {
			let widest = view
				.rows()
				.map(|row| line_width(&labeler.line(row.option)))
				.max()
				.unwrap_or(0);
			let decoration = HIGHLIGHT_SYMBOL.width() + SELECTED_MARK.width();
			(view.filtered.len(), widest + decoration)
		}
		ListStatus::NoOptions => (1, ui.no_options_label.width()),
		ListStatus::NoMatches => (
			2,
			ui.no_matches_label.width().max(ui.no_matches_hint.width()),
		),
	};
	let rows = clamp_u16(rows).clamp(1, ui.max_height.max(1));

	let search_width = if view.with_search {
		SEARCH_PROMPT.width() + view.query.width().max(ui.search_placeholder.width())
	} else {
		0
	};
	let search_rows = u16::from(view.with_search);

	Size::new(
		clamp_u16(body_width.max(search_width)).saturating_add(BORDER_CELLS),
		rows.saturating_add(search_rows)
			.saturating_add(BORDER_CELLS),
	)
}

/// Draw the popover into `area` and return the rectangle holding option rows,
/// if any were drawn.
pub fn render_popover(
	frame: &mut Frame,
	area: Rect,
	list_state: &mut ListState,
	ctx: PopoverContext<'_>,
) -> Option<Rect> {
	let PopoverContext {
		view,
		ui,
		theme,
		labeler,
	} = ctx;

	let block = Block::bordered().border_style(theme.border_style(true));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let body = if view.with_search {
		let [search_area, body] =
			Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
		render_search_line(frame, search_area, &view, ui, theme);
		body
	} else {
		inner
	};
	if body.is_empty() {
		return None;
	}

	match view.status() {
		ListStatus::Results => {
			let items: Vec<ListItem> = view
				.rows()
				.map(|row| {
					let mut line = labeler.line(row.option);
					if row.selected {
						line.spans
							.push(Span::styled(SELECTED_MARK, theme.selected_mark));
					}
					if row.option.disabled {
						line = line.patch_style(theme.disabled);
					}
					ListItem::new(line)
				})
				.collect();
			let list = List::new(items)
				.highlight_symbol(HIGHLIGHT_SYMBOL)
				.highlight_spacing(HighlightSpacing::Always)
				.highlight_style(theme.row_highlight);
			list_state.select(view.active);
			frame.render_stateful_widget(list, body, list_state);
			Some(body)
		}
		ListStatus::NoOptions => {
			let message = Paragraph::new(Line::styled(ui.no_options_label.clone(), theme.empty))
				.alignment(Alignment::Center);
			frame.render_widget(message, body);
			None
		}
		ListStatus::NoMatches => {
			let message = Paragraph::new(vec![
				Line::styled(ui.no_matches_label.clone(), theme.empty),
				Line::styled(ui.no_matches_hint.clone(), theme.hint),
			])
			.alignment(Alignment::Center);
			frame.render_widget(message, body);
			None
		}
	}
}

fn render_search_line(
	frame: &mut Frame,
	area: Rect,
	view: &DropdownView<'_>,
	ui: &UiConfig,
	theme: &Theme,
) {
	let text = if view.query.is_empty() {
		Span::styled(ui.search_placeholder.clone(), theme.placeholder)
	} else {
		Span::styled(view.query.to_string(), theme.query)
	};
	let line = Line::from(vec![Span::styled(SEARCH_PROMPT, theme.border), text]);
	frame.render_widget(Paragraph::new(line), area);

	let cursor_x = area
		.x
		.saturating_add(clamp_u16(SEARCH_PROMPT.width() + view.query.width()));
	if cursor_x < area.right() {
		frame.set_cursor_position(Position::new(cursor_x, area.y));
	}
}
