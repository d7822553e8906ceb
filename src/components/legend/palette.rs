use crate::theme::ThemeMode;

// Inactive entries share one muted tone per theme, for both dot and label.
const MUTED_LIGHT: &str = "#ddd";
const MUTED_DARK: &str = "#2f2f2f";

/// Dot color for a legend entry: the option's own color while checked, the
/// theme's muted tone otherwise.
pub fn dot_color<'a>(mode: ThemeMode, checked: bool, option_color: &'a str) -> &'a str {
	match (mode, checked) {
		(_, true) => option_color,
		(ThemeMode::Light, false) => MUTED_LIGHT,
		(ThemeMode::Dark, false) => MUTED_DARK,
	}
}

/// Label color for a legend entry.
pub fn label_color(mode: ThemeMode, checked: bool) -> &'static str {
	match (mode, checked) {
		(ThemeMode::Light, true) => "#000",
		(ThemeMode::Light, false) => MUTED_LIGHT,
		(ThemeMode::Dark, true) => "#fff",
		(ThemeMode::Dark, false) => MUTED_DARK,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn checked_dots_keep_the_option_color_in_both_themes() {
		assert_eq!(dot_color(ThemeMode::Light, true, "#f00"), "#f00");
		assert_eq!(dot_color(ThemeMode::Dark, true, "#f00"), "#f00");
	}

	#[test]
	fn unchecked_dots_use_the_muted_tone() {
		assert_eq!(dot_color(ThemeMode::Light, false, "#f00"), "#ddd");
		assert_eq!(dot_color(ThemeMode::Dark, false, "#f00"), "#2f2f2f");
	}

	#[test]
	fn label_colors_cover_the_full_table() {
		assert_eq!(label_color(ThemeMode::Light, true), "#000");
		assert_eq!(label_color(ThemeMode::Light, false), "#ddd");
		assert_eq!(label_color(ThemeMode::Dark, true), "#fff");
		assert_eq!(label_color(ThemeMode::Dark, false), "#2f2f2f");
	}
}
