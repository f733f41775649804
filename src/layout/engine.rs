//! A single layout pass: line breaking followed by size resolution

use tracing::debug_span;

use crate::style::TagStyle;

use super::chip::Chip;
use super::flow::assign_lines;
use super::size::{effective_lines, natural_height, resolve_size};
use super::types::{LayoutResult, MeasureSpec};

/// Lay out measured chips under the given constraints.
///
/// The input chips are left untouched; the result owns fresh copies with
/// their line and column filled in.
pub fn compute(
    chips: &[Chip],
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
    row_height: f64,
    style: &TagStyle,
) -> LayoutResult {
    let _span = debug_span!("tag_flow_layout", chips = chips.len()).entered();

    if chips.is_empty() {
        return LayoutResult::empty(width_spec, height_spec, row_height);
    }

    let assignment = assign_lines(
        chips,
        width_spec.available(),
        style.horizontal_divider,
        &style.insets,
    );
    let size = resolve_size(
        assignment.line_count,
        assignment.natural_width,
        width_spec,
        height_spec,
        row_height,
        style,
    );
    let visible_lines = effective_lines(assignment.line_count, style.max_lines);

    LayoutResult {
        chips: assignment.chips,
        width: size.width,
        height: size.height,
        natural_width: assignment.natural_width,
        natural_height: natural_height(
            visible_lines,
            row_height,
            style.vertical_divider,
            &style.insets,
        ),
        line_count: assignment.line_count,
        visible_lines,
        row_height,
    }
}
