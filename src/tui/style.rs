//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

/// Chart line palette, cycled per outlet.
const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// Bar color for the house-total chart.
pub const HOUSE_COLOR: Color = Color::Cyan;
/// State cell color for a switched-on outlet.
pub const ON_COLOR: Color = Color::Green;
/// State cell color for a switched-off outlet.
pub const OFF_COLOR: Color = Color::Red;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Returns the chart color for an outlet index.
pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Computes Y-axis bounds from chart datasets with 10% headroom.
///
/// The lower bound is pinned at zero since consumption is never negative.
pub fn auto_bounds_y(datasets: &[Vec<(f64, f64)>]) -> [f64; 2] {
    let max = datasets
        .iter()
        .flatten()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return [0.0, 1.0];
    }
    [0.0, (max * 1.1).max(0.1)]
}
