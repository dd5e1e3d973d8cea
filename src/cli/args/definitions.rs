use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};
use select_dropdown::OptionId;

use super::options::{LabelFormatArg, MountArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `select-dropdown` binary.
///
/// Boolean switches take an optional value so a flag given on the command
/// line can also turn off a setting enabled by a config file.
#[derive(Parser, Debug)]
#[command(
	name = "select-dropdown",
	version,
	long_version = long_version(),
	about = "Pick one or more options from a filterable terminal dropdown",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SELECT_DROPDOWN_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "options",
		value_delimiter = ',',
		value_name = "LABEL",
		conflicts_with = "options_file",
		help = "Comma-separated option labels, numbered from 1 (default: config options)"
	)]
	pub(crate) options: Option<Vec<String>>,
	#[arg(
		short = 'f',
		long = "options-file",
		value_name = "FILE",
		help = "Load options from a JSON array file (default: config options)"
	)]
	pub(crate) options_file: Option<PathBuf>,
	#[arg(
		short = 'm',
		long = "multiple",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Allow selecting several options (default: disabled)"
	)]
	pub(crate) multiple: Option<bool>,
	#[arg(
		short = 's',
		long = "search",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Show the search line inside the popover (default: enabled)"
	)]
	pub(crate) search: Option<bool>,
	#[arg(
		long = "disabled",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Render the control without accepting changes (default: disabled)"
	)]
	pub(crate) disabled: Option<bool>,
	#[arg(
		long = "skip-disabled",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Skip disabled options while navigating (default: enabled)"
	)]
	pub(crate) skip_disabled: Option<bool>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Text shown while nothing is selected (default: \"Select an option...\")"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "search-placeholder",
		value_name = "TEXT",
		help = "Text shown in the empty search line (default: \"Search options...\")"
	)]
	pub(crate) search_placeholder: Option<String>,
	#[arg(
		long,
		value_enum,
		help = "Draw the popover inline or as an overlay (default: inline)"
	)]
	pub(crate) mount: Option<MountArg>,
	#[arg(
		long,
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Draw a full border around the trigger (default: enabled)"
	)]
	pub(crate) outlined: Option<bool>,
	#[arg(
		long = "max-height",
		value_name = "ROWS",
		help = "Maximum number of option rows in the popover (default: 10)"
	)]
	pub(crate) max_height: Option<u16>,
	#[arg(
		long = "label-format",
		value_enum,
		help = "How option rows are labelled (default: icon)"
	)]
	pub(crate) label_format: Option<LabelFormatArg>,
	#[arg(
		long = "select",
		value_delimiter = ',',
		value_name = "ID",
		help = "Comma-separated ids selected on start (default: config value)"
	)]
	pub(crate) select: Option<Vec<OptionId>>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title drawn on the trigger border (default: none)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Tracing filter for the log file (default: $SELECT_DROPDOWN_LOG or info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
