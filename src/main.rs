mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use select_dropdown::logging;
use settings::ResolvedConfig;
use workflow::DropdownWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if let Err(err) = logging::initialize(cli.log_level.as_deref()) {
		eprintln!("warning: logging disabled: {err:#}");
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_dropdown(cli.output, resolved)
}

/// Run the dropdown and print the outcome in the chosen format.
fn run_dropdown(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let outcome = DropdownWorkflow::from_config(settings).run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
