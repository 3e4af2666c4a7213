/// Case-transformation policy applied to a selected entry.
///
/// Exactly one mode is active per invocation; the default is
/// `Capitalized`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatMode {
	/// Every alphabetic character forced to lowercase.
	Lower,
	/// Every alphabetic character forced to uppercase.
	Upper,
	/// First character forced to uppercase, the rest to lowercase.
	#[default]
	Capitalized,
}

/// Applies a format mode to a name.
///
/// Pure and locale-independent: uses Unicode case mapping only, no
/// global locale state. Non-alphabetic characters (hyphens, apostrophes)
/// pass through unchanged in every mode.
///
/// Under `Capitalized`, an all-caps or mixed-case input is normalized to
/// exactly one capital letter at position 0. An empty input yields an
/// empty output.
pub fn format_name(name: &str, mode: FormatMode) -> String {
	match mode {
		FormatMode::Lower => name.chars().flat_map(|c| c.to_lowercase()).collect(),
		FormatMode::Upper => name.chars().flat_map(|c| c.to_uppercase()).collect(),
		FormatMode::Capitalized => {
			let mut chars = name.chars();
			match chars.next() {
				None => String::new(),
				Some(first) => first
					.to_uppercase()
					.chain(chars.flat_map(|c| c.to_lowercase()))
					.collect(),
			}
		}
	}
}
