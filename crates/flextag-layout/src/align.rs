//! Row alignment.

use flextag_core::LineAlignment;

use crate::line::Line;

/// Leading offset of a row of `line_width` inside `available_width`.
///
/// Never negative: a row wider than the available width starts at the
/// content edge whatever the alignment.
pub fn alignment_offset(alignment: LineAlignment, line_width: f64, available_width: f64) -> f64 {
    let leftover = available_width - line_width;
    let offset = match alignment {
        LineAlignment::Left => 0.0,
        LineAlignment::Center => leftover / 2.0,
        LineAlignment::Right => leftover,
    };
    // f64::max drops NaN in favour of zero
    offset.max(0.0)
}

impl Line {
    /// Leading offset of this line for the given alignment.
    pub fn offset(&self, alignment: LineAlignment, available_width: f64) -> f64 {
        alignment_offset(alignment, self.total_width, available_width)
    }
}
