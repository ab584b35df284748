//! Display formatting for terminal output
//!
//! Small helpers shared by the report formatters and the interactive menu.

/// Glyph used for one unit of a percentage bar
pub const BAR_GLYPH: char = '█';

/// Number of bar units per percentage point
const BAR_UNITS_PER_PERCENT: f64 = 0.5;

/// Length of the bar for a percentage, rounded to the nearest unit
///
/// 100% maps to 50 units. Halves round to the even unit, so 1% gets no bar
/// and 5% gets two units.
pub fn bar_length(percentage: f64) -> usize {
    if !percentage.is_finite() || percentage <= 0.0 {
        return 0;
    }
    (percentage * BAR_UNITS_PER_PERCENT).round_ties_even() as usize
}

/// A bar of `length` glyphs
pub fn format_bar(length: usize) -> String {
    std::iter::repeat(BAR_GLYPH).take(length).collect()
}

/// A percentage with one decimal place, e.g. "80.0%"
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// A section title framed with dashes
pub fn section_header(title: &str) -> String {
    format!("----- {} -----", title)
}

/// A banner title framed with equals signs
pub fn banner(title: &str) -> String {
    format!("===== {} =====", title)
}

/// A rule of `=` as wide as a banner for `title`
pub fn banner_rule(title: &str) -> String {
    "=".repeat(banner(title).chars().count())
}
