use select_dropdown::OptionId;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let control = &config.control;
	let ui = &config.ui;
	let disabled = config.options.iter().filter(|option| option.disabled).count();

	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Mode: {}", control.mode.as_str()),
		format!("  Search: {}", bool_to_word(control.with_search)),
		format!("  Disabled: {}", bool_to_word(control.disabled)),
		format!("  Skip disabled options: {}", bool_to_word(control.skip_disabled)),
		format!("  Options: {} ({disabled} disabled)", config.options.len()),
	];
	if !config.initial_ids.is_empty() {
		lines.push(format!("  Initial value: {}", join_ids(&config.initial_ids)));
	}
	if let Some(title) = &ui.title {
		lines.push(format!("  Title: {title}"));
	}
	lines.push(format!("  Placeholder: {}", ui.placeholder));
	lines.push(format!("  Search placeholder: {}", ui.search_placeholder));
	lines.push(format!("  Outlined: {}", bool_to_word(ui.outlined)));
	lines.push(format!("  Mount: {}", ui.mount.as_str()));
	lines.push(format!("  Max height: {}", ui.max_height));
	lines.push(format!("  Popover gap: {}", ui.popover_gap));
	lines.push(format!("  Label format: {}", ui.label_format.as_str()));
	lines
}

fn join_ids(ids: &[OptionId]) -> String {
	ids.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(", ")
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
