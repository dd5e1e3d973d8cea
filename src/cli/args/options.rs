use clap::ValueEnum;
use select_dropdown::{LabelFormat, Mount};

/// Popover mounting accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum MountArg {
	Inline,
	Overlay,
}

impl From<MountArg> for Mount {
	fn from(value: MountArg) -> Self {
		match value {
			MountArg::Inline => Mount::Inline,
			MountArg::Overlay => Mount::Overlay,
		}
	}
}

/// Built-in label formats selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LabelFormatArg {
	Label,
	Icon,
	Id,
}

impl From<LabelFormatArg> for LabelFormat {
	fn from(value: LabelFormatArg) -> Self {
		match value {
			LabelFormatArg::Label => LabelFormat::Label,
			LabelFormatArg::Icon => LabelFormat::Icon,
			LabelFormatArg::Id => LabelFormat::Id,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
