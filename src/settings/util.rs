use select_dropdown::{OptionId, SelectOption};

/// Map a user supplied id onto the id of a known option.
///
/// Ids read from the command line or environment arrive as text or numbers
/// depending on how they parse, so an id without an exact match falls back
/// to comparing the printed form. Unknown ids are returned unchanged.
pub(super) fn canonical_id(options: &[SelectOption], id: OptionId) -> OptionId {
	if options.iter().any(|option| option.id == id) {
		return id;
	}
	let printed = id.to_string();
	options
		.iter()
		.find(|option| option.id.to_string() == printed)
		.map_or(id, |option| option.id.clone())
}

/// Drop titles and labels that are only whitespace.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|text| text.trim().to_string())
		.filter(|text| !text.is_empty())
}
