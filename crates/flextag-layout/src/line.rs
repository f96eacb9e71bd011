//! Greedy line packing.
//!
//! Items are consumed in order and appended to the current line until the
//! next one would push the line past the available width. A line always
//! accepts its first item, so an item wider than the container ends up alone
//! on its own line at its intrinsic width.

use smallvec::SmallVec;

use flextag_core::Size;

use crate::measure::Measure;

/// An item as measured for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    /// Position of the item in the input sequence
    pub index: usize,
    /// Measured size
    pub size: Size,
}

/// One packed row. Only lives for the duration of a layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub items: SmallVec<[LineItem; 8]>,
    /// Sum of item widths plus interior horizontal spacing
    pub total_width: f64,
    /// Tallest item in the line
    pub max_height: f64,
}

impl Line {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Input indices of the items in this line, in order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|item| item.index)
    }

    fn push(&mut self, item: LineItem, total_width: f64) {
        self.total_width = total_width;
        self.max_height = self.max_height.max(item.size.height);
        self.items.push(item);
    }
}

/// Packs measured items into lines.
#[derive(Debug, Clone, Copy)]
pub struct LinePacker {
    available_width: f64,
    spacing: f64,
}

impl LinePacker {
    /// `available_width` is the content width (container minus horizontal
    /// insets); `spacing` is the gap between neighbouring items. Negative or
    /// NaN spacing packs as zero.
    pub fn new(available_width: f64, spacing: f64) -> Self {
        let spacing = if spacing > 0.0 { spacing } else { 0.0 };
        Self { available_width, spacing }
    }

    /// Measure every item against the available width and pack the results.
    pub fn pack<M: Measure>(&self, items: &[M]) -> Vec<Line> {
        let sizes = items
            .iter()
            .map(|item| item.measure(self.available_width.max(0.0)));
        self.pack_sizes(sizes)
    }

    /// Pack already measured sizes, indexed by their position in `sizes`.
    pub fn pack_sizes(&self, sizes: impl IntoIterator<Item = Size>) -> Vec<Line> {
        // A non-positive (or NaN) budget degrades to a single column.
        let single_column = !(self.available_width > 0.0);

        let mut lines = Vec::new();
        let mut current = Line::default();

        for (index, size) in sizes.into_iter().enumerate() {
            let size = size.non_negative();
            let width_needed = if current.is_empty() {
                size.width
            } else {
                current.total_width + self.spacing + size.width
            };

            let total_width = if !current.is_empty()
                && (single_column || width_needed > self.available_width)
            {
                tracing::trace!(
                    items = current.len(),
                    width = current.total_width,
                    height = current.max_height,
                    "line closed"
                );
                lines.push(std::mem::take(&mut current));
                size.width
            } else {
                width_needed
            };

            current.push(LineItem { index, size }, total_width);
        }

        if !current.is_empty() {
            tracing::trace!(
                items = current.len(),
                width = current.total_width,
                height = current.max_height,
                "line closed"
            );
            lines.push(current);
        }

        lines
    }
}

/// Convenience wrapper around [`LinePacker::pack`].
pub fn pack_lines<M: Measure>(items: &[M], available_width: f64, spacing: f64) -> Vec<Line> {
    LinePacker::new(available_width, spacing).pack(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sizes(widths: &[f64]) -> Vec<Size> {
        widths.iter().map(|&w| Size::new(w, 20.0)).collect()
    }

    fn line_widths(lines: &[Line]) -> Vec<f64> {
        lines.iter().map(|line| line.total_width).collect()
    }

    #[test]
    fn test_empty_input() {
        let lines = pack_lines::<Size>(&[], 200.0, 10.0);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_all_items_fit_one_line() {
        let lines = pack_lines(&sizes(&[50.0, 60.0, 40.0]), 200.0, 10.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 3);
        // 50 + 10 + 60 + 10 + 40
        assert!((lines[0].total_width - 170.0).abs() < 0.001);
    }

    #[test]
    fn test_narrow_width_breaks_every_item() {
        let lines = pack_lines(&sizes(&[50.0, 60.0, 40.0]), 100.0, 10.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(line_widths(&lines), vec![50.0, 60.0, 40.0]);
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        // 45 + 10 + 45 == 100, not greater
        let lines = pack_lines(&sizes(&[45.0, 45.0]), 100.0, 10.0);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_overflow_item_gets_own_line() {
        let lines = pack_lines(&sizes(&[30.0, 250.0, 30.0]), 100.0, 10.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].len(), 1);
        assert!((lines[1].total_width - 250.0).abs() < 0.001);
    }

    #[test]
    fn test_unbounded_item_keeps_intrinsic_width() {
        let items = vec![Size::new(30.0, 20.0), Size::new(f64::INFINITY, 20.0), Size::new(30.0, 20.0)];
        let lines = pack_lines(&items, 100.0, 10.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].items[0].size.width, f64::INFINITY);
        assert_eq!(lines[1].total_width, f64::INFINITY);
    }

    #[test]
    fn test_non_positive_width_is_single_column() {
        let zero_width = pack_lines(&sizes(&[0.0, 0.0, 0.0]), 0.0, 0.0);
        assert_eq!(zero_width.len(), 3);

        let negative = pack_lines(&sizes(&[10.0, 10.0]), -50.0, 5.0);
        assert_eq!(negative.len(), 2);

        let nan = pack_lines(&sizes(&[10.0, 10.0]), f64::NAN, 5.0);
        assert_eq!(nan.len(), 2);
    }

    #[test]
    fn test_max_height_per_line() {
        let items = vec![Size::new(40.0, 20.0), Size::new(40.0, 32.0), Size::new(40.0, 18.0)];
        let lines = pack_lines(&items, 90.0, 10.0);
        assert_eq!(lines.len(), 2);
        assert!((lines[0].max_height - 32.0).abs() < 0.001);
        assert!((lines[1].max_height - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_measure_receives_available_width() {
        use crate::measure::MeasureFn;
        use std::cell::Cell;

        let seen = Cell::new(0.0);
        let item = MeasureFn(|max: f64| {
            seen.set(max);
            Size::new(10.0, 10.0)
        });
        pack_lines(&[item], 180.0, 4.0);
        assert!((seen.get() - 180.0).abs() < 0.001);
    }

    proptest! {
        #[test]
        fn lines_respect_width_unless_single(
            widths in prop::collection::vec(0.0f64..300.0, 0..40),
            available in 0.0f64..400.0,
            spacing in 0.0f64..20.0,
        ) {
            let lines = pack_lines(&sizes(&widths), available, spacing);
            for line in &lines {
                prop_assert!(line.total_width <= available + 1e-9 || line.len() == 1);
            }
        }

        #[test]
        fn lines_preserve_input_order(
            widths in prop::collection::vec(0.0f64..300.0, 0..40),
            available in -50.0f64..400.0,
            spacing in 0.0f64..20.0,
        ) {
            let lines = pack_lines(&sizes(&widths), available, spacing);
            let order: Vec<usize> = lines.iter().flat_map(|line| line.indices()).collect();
            let expected: Vec<usize> = (0..widths.len()).collect();
            prop_assert_eq!(order, expected);
        }

        #[test]
        fn packing_is_deterministic(
            widths in prop::collection::vec(0.0f64..300.0, 0..40),
            available in 0.0f64..400.0,
        ) {
            let first = pack_lines(&sizes(&widths), available, 8.0);
            let second = pack_lines(&sizes(&widths), available, 8.0);
            prop_assert_eq!(first, second);
        }
    }
}
