use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};

use super::App;
use super::components::{
	OptionLabeler, PopoverContext, TriggerContext, popover_size, render_popover, render_trigger,
};
use super::config::Mount;
use super::state::HitAreas;

const CLOSED_HINT: &str = "space open · enter accept · esc cancel";
const OPEN_HINT: &str = "↑↓ move · enter pick · esc close";

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let trigger_height = if self.ui.outlined { 3 } else { 2 };
		let [trigger_area, body_area, footer_area] = Layout::vertical([
			Constraint::Length(trigger_height),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.areas(area);

		let labeler = OptionLabeler::new(self.ui.label_format, self.option_label.as_ref());
		let chip_remove = render_trigger(
			frame,
			trigger_area,
			TriggerContext {
				view: self.controller.view(),
				ui: &self.ui,
				theme: &self.theme,
				labeler,
			},
		);
		self.hits = HitAreas {
			trigger: trigger_area,
			chip_remove,
			..HitAreas::default()
		};

		let hint = if self.controller.is_open() {
			OPEN_HINT
		} else {
			CLOSED_HINT
		};
		frame.render_widget(
			Paragraph::new(Line::styled(hint, self.theme.hint)),
			footer_area,
		);

		let viewport = match self.ui.mount {
			Mount::Inline => trigger_area.union(body_area),
			Mount::Overlay => frame.area(),
		};
		self.draw_popover(frame, trigger_area, viewport);
	}

	fn draw_popover(&mut self, frame: &mut Frame, anchor: Rect, viewport: Rect) {
		let content = {
			let labeler = OptionLabeler::new(self.ui.label_format, self.option_label.as_ref());
			popover_size(&PopoverContext {
				view: self.controller.view(),
				ui: &self.ui,
				theme: &self.theme,
				labeler,
			})
		};
		let Some(placement) = self
			.controller
			.positioner_mut()
			.update(anchor, viewport, content)
		else {
			return;
		};
		if placement.area.is_empty() {
			return;
		}

		if self.ui.mount == Mount::Overlay {
			frame.render_widget(Clear, placement.area);
		}
		let labeler = OptionLabeler::new(self.ui.label_format, self.option_label.as_ref());
		let list = render_popover(
			frame,
			placement.area,
			&mut self.list_state,
			PopoverContext {
				view: self.controller.view(),
				ui: &self.ui,
				theme: &self.theme,
				labeler,
			},
		);
		self.hits.popover = Some(placement.area);
		self.hits.list = list;
		self.hits.list_offset = self.list_state.offset();
	}
}
