use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where the settings that validation can reject came from.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) max_height: Option<SettingSource>,
	pub(crate) options: Option<SettingSource>,
	pub(crate) value: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_max_height(&self) -> SettingSource {
		self.max_height
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.max_height"))
	}

	pub(crate) fn source_for_options(&self) -> SettingSource {
		self.options
			.clone()
			.unwrap_or(SettingSource::ConfigKey("options"))
	}

	pub(crate) fn source_for_value(&self) -> SettingSource {
		self.value
			.clone()
			.unwrap_or(SettingSource::ConfigKey("value"))
	}
}
