use anyhow::Result;
use ratatui::text::Line;
use select_dropdown_core::{
	ChangeHandler, DropdownConfig, DropdownController, SelectOption, Value,
};

use super::App;
use super::config::UiConfig;
use super::keymap::KeyScope;
use super::outcome::DropdownOutcome;
use super::popover::PopoverPositioner;
use super::state::LabelDelegate;
use super::style::Theme;

/// Builder for an interactive terminal dropdown.
///
/// ```no_run
/// use select_dropdown::{DropdownUi, SelectOption};
///
/// let outcome = DropdownUi::new(vec![
/// 	SelectOption::new(1, "Apple"),
/// 	SelectOption::new(2, "Banana"),
/// ])
/// .on_change(|value| eprintln!("{value:?}"))
/// .run()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct DropdownUi {
	options: Vec<SelectOption>,
	config: DropdownConfig,
	value: Value,
	ui: UiConfig,
	theme: Option<Theme>,
	on_change: Option<ChangeHandler>,
	option_label: Option<LabelDelegate>,
}

impl DropdownUi {
	pub fn new(options: Vec<SelectOption>) -> Self {
		Self {
			options,
			config: DropdownConfig::default(),
			value: Value::None,
			ui: UiConfig::default(),
			theme: None,
			on_change: None,
			option_label: None,
		}
	}

	pub fn with_config(mut self, config: DropdownConfig) -> Self {
		self.config = config;
		self
	}

	pub fn with_value(mut self, value: Value) -> Self {
		self.value = value;
		self
	}

	pub fn with_ui_config(mut self, ui: UiConfig) -> Self {
		self.ui = ui;
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Without a change handler the dropdown is read-only.
	pub fn on_change(mut self, handler: impl FnMut(&Value) + 'static) -> Self {
		self.on_change = Some(Box::new(handler));
		self
	}

	pub fn with_option_label(
		mut self,
		delegate: impl Fn(&SelectOption) -> Line<'static> + 'static,
	) -> Self {
		self.option_label = Some(Box::new(delegate));
		self
	}

	/// Assemble the [`App`] without touching the terminal.
	pub fn into_app(self) -> App {
		let mut controller = DropdownController::with_collaborators(
			self.options,
			self.config,
			PopoverPositioner::with_offset(self.ui.popover_gap),
			KeyScope::default(),
		)
		.with_value(self.value);
		controller.set_on_change(self.on_change);

		let mut app = App::new(controller, self.ui);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_option_label(self.option_label);
		app
	}

	/// Run the interactive dropdown with the configured options.
	pub fn run(self) -> Result<DropdownOutcome> {
		self.into_app().run()
	}
}
