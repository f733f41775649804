//! Greedy line breaking
//!
//! Chips are placed left to right in label order. A chip that would push the
//! current line past the available width starts a new line, unless it is the
//! first chip on its line: every line holds at least one chip, so a chip wider
//! than the container sits alone on its own line instead of being split.
//! There is no look-ahead and no reordering; a later, narrower chip never
//! moves back to fill a gap left on an earlier line.

use tracing::trace;

use super::chip::Chip;
use super::types::Insets;

/// The result of breaking chips into lines
#[derive(Debug, Clone, PartialEq)]
pub struct LineAssignment {
    /// New chips with line and column set
    pub chips: Vec<Chip>,
    /// Number of lines used (0 for no chips)
    pub line_count: usize,
    /// Width of the widest line, including horizontal insets
    pub natural_width: f64,
}

/// Assign every chip a line and column.
///
/// Each line is measured with the container's horizontal insets on both
/// ends and `horizontal_divider` between adjacent chips.
pub fn assign_lines(
    chips: &[Chip],
    available_width: f64,
    horizontal_divider: f64,
    insets: &Insets,
) -> LineAssignment {
    let line_start = insets.horizontal();
    let mut placed = Vec::with_capacity(chips.len());
    let mut used = line_start;
    let mut line = 0;
    let mut column = 0;
    let mut natural_width = 0.0f64;

    for chip in chips {
        used += if column == 0 {
            chip.width
        } else {
            horizontal_divider + chip.width
        };

        if used > available_width && column > 0 {
            line += 1;
            column = 0;
            used = line_start + chip.width;
        }

        natural_width = natural_width.max(used);
        trace!(text = %chip.text, line, column, used, "placed chip");
        placed.push(chip.placed(line, column));
        column += 1;
    }

    let line_count = if placed.is_empty() { 0 } else { line + 1 };

    LineAssignment {
        chips: placed,
        line_count,
        natural_width,
    }
}
