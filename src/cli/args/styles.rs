use std::sync::OnceLock;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects, Style};
use select_dropdown::{app_dirs, logging};

use crate::settings::{ENV_PREFIX, ENV_SEPARATOR, default_config_files};

/// `--version` output: the files, variables and log location this build
/// resolves on the current machine.
pub(super) fn long_version() -> &'static str {
	static LONG_VERSION: OnceLock<String> = OnceLock::new();
	LONG_VERSION.get_or_init(|| version_report().join("\n"))
}

fn version_report() -> Vec<String> {
	let mut lines = vec![env!("CARGO_PKG_VERSION").to_string(), String::new()];

	lines.push("config files, lowest precedence first:".to_string());
	lines.extend(
		default_config_files()
			.iter()
			.map(|path| format!("  {}", path.display())),
	);
	lines.push(format!(
		"environment overrides: {ENV_PREFIX}{ENV_SEPARATOR}<SECTION>{ENV_SEPARATOR}<KEY>"
	));

	let log_file = match app_dirs::get_data_dir() {
		Ok(dir) => dir.join(logging::LOG_FILE).display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	lines.push(format!("log file: {log_file}"));
	lines.push(format!("log filter: ${} or --log-level", logging::LOG_ENV));
	lines
}

const ACCENT: Style = AnsiColor::Magenta.on_default().effects(Effects::BOLD);

/// Help colours: magenta headings, blue flags, dimmed placeholders.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(ACCENT)
		.usage(ACCENT)
		.literal(AnsiColor::Blue.on_default())
		.placeholder(Style::new().effects(Effects::DIMMED))
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Yellow.on_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_report_lists_config_files_and_log_location() {
		let report = version_report();
		assert_eq!(report[0], env!("CARGO_PKG_VERSION"));
		assert!(report.iter().any(|line| line.ends_with("select-dropdown.toml")));
		assert!(report.iter().any(|line| line.contains("SELECT_DROPDOWN__<SECTION>__<KEY>")));
		assert!(report.iter().any(|line| line.starts_with("log file:")));
		assert!(report.iter().any(|line| line.contains("$SELECT_DROPDOWN_LOG")));
	}
}
