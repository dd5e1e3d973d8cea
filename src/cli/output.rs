use anyhow::Result;
use select_dropdown::DropdownOutcome;
use serde_json::json;

/// Print one selected label per line.
pub(crate) fn print_plain(outcome: &DropdownOutcome) {
	if !outcome.accepted {
		println!("Selection cancelled");
		return;
	}

	let selected = outcome.value.selected();
	if selected.is_empty() {
		println!("No selection");
		return;
	}
	for option in selected {
		println!("{}", option.label);
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &DropdownOutcome) -> Result<String> {
	let ids: Vec<_> = outcome.value.ids().collect();
	let payload = json!({
		"accepted": outcome.accepted,
		"ids": ids,
		"value": outcome.value,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &DropdownOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
