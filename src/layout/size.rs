//! Resolving the bounding size of a flow against host constraints

use crate::style::TagStyle;

use super::types::{Insets, MeasureSpec, Size};

/// Lines that count towards height and painting
pub fn effective_lines(line_count: usize, max_lines: Option<usize>) -> usize {
    max_lines.map_or(line_count, |max| line_count.min(max))
}

/// Height of `lines` rows stacked with `vertical_divider` between them.
///
/// Zero lines is zero height; insets are not added to an empty flow.
pub fn natural_height(lines: usize, row_height: f64, vertical_divider: f64, insets: &Insets) -> f64 {
    if lines == 0 {
        return 0.0;
    }
    let lines = lines as f64;
    row_height * lines + vertical_divider * (lines - 1.0) + insets.vertical()
}

/// Resolve the final size of a flow.
///
/// `line_count` is the uncapped number of lines from line breaking; the
/// style's `max_lines` cap is applied here.
pub fn resolve_size(
    line_count: usize,
    natural_width: f64,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
    row_height: f64,
    style: &TagStyle,
) -> Size {
    let lines = effective_lines(line_count, style.max_lines);
    let height = natural_height(lines, row_height, style.vertical_divider, &style.insets);
    Size::new(width_spec.resolve(natural_width), height_spec.resolve(height))
}
