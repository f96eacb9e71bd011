//! Flow layout engine.
//!
//! A pass resolves the container width, packs items into lines, aligns each
//! line and assigns absolute frames top to bottom. The engine holds no state
//! between passes; callers decide when a pass is needed.

use flextag_core::{Frame, HeightMode, Insets, Size, Spacing};

use crate::config::LayoutConfig;
use crate::line::{Line, LinePacker};
use crate::measure::Measure;

/// Frame assigned to one input item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedItem {
    /// Position of the item in the input sequence
    pub index: usize,
    /// Absolute frame in container coordinates
    pub frame: Frame,
    /// Row the item was packed into
    pub line: usize,
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    /// One entry per input item, in input order
    pub items: Vec<PlacedItem>,
    /// Height of all rows, spacing and vertical insets
    pub content_height: f64,
    /// Container width the pass was computed against
    pub resolved_width: f64,
    /// Width available to rows (resolved width minus horizontal insets)
    pub available_width: f64,
    /// Number of packed rows
    pub line_count: usize,
}

impl LayoutResult {
    /// Frame of the item at `index`, if it was laid out.
    pub fn frame(&self, index: usize) -> Option<Frame> {
        self.items.get(index).map(|placed| placed.frame)
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.items.iter().map(|placed| placed.frame)
    }

    /// Find the item under a point. Later items win where frames touch.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.items
            .iter()
            .rev()
            .find(|placed| placed.frame.contains(x, y))
            .map(|placed| placed.index)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Heights a container applies after a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    /// Height of the container itself
    pub container_height: f64,
    /// Height of the scrollable content inside the container
    pub scroll_content_height: f64,
    /// Width of the scrollable content inside the container
    pub scroll_content_width: f64,
}

/// Smallest height handed to a container, to keep it from collapsing.
pub const MIN_CONTAINER_HEIGHT: f64 = 1.0;

/// Computes flow layouts for a configuration.
#[derive(Debug, Clone, Default)]
pub struct FlowLayout {
    config: LayoutConfig,
}

impl FlowLayout {
    /// Negative or non-finite insets and spacing in `config` are read as
    /// zero by every pass; use [`LayoutConfig::validate`] to reject them
    /// up front instead.
    pub fn new(config: LayoutConfig) -> Self {
        if let Err(error) = config.validate() {
            tracing::warn!(%error, "layout config has invalid geometry, clamping");
        }
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut LayoutConfig {
        &mut self.config
    }

    fn insets(&self) -> Insets {
        self.config.insets.clamped()
    }

    fn spacing(&self) -> Spacing {
        self.config.spacing.clamped()
    }

    /// Resolve the width a pass should lay out against.
    ///
    /// A non-positive or non-finite container width means the container has not
    /// been measured yet; the configured fallback width, less horizontal
    /// insets, stands in for it. The result is floored at
    /// `min_container_width`. This only avoids a degenerate first pass and
    /// says nothing about the real container.
    pub fn resolve_width(&self, container_width: f64) -> f64 {
        let config = &self.config;
        let width = if container_width > 0.0 && container_width.is_finite() {
            container_width
        } else {
            let fallback = config.fallback_width - self.insets().horizontal();
            tracing::debug!(container_width, fallback, "container width unavailable, using fallback");
            fallback
        };
        width.max(config.min_container_width)
    }

    /// Lay out `items` inside a container of `container_width`.
    pub fn layout<M: Measure>(&self, items: &[M], container_width: f64) -> LayoutResult {
        let resolved_width = self.resolve_width(container_width);
        let insets = self.insets();
        let available_width = (resolved_width - insets.horizontal()).max(0.0);

        let lines = LinePacker::new(available_width, self.spacing().horizontal).pack(items);
        let placed = self.place_lines(&lines, available_width);
        let content_height = self.content_height(&lines);

        tracing::debug!(
            items = items.len(),
            lines = lines.len(),
            resolved_width,
            content_height,
            "flow layout pass"
        );

        LayoutResult {
            items: placed,
            content_height,
            resolved_width,
            available_width,
            line_count: lines.len(),
        }
    }

    /// Assign absolute frames to packed lines.
    pub fn place_lines(&self, lines: &[Line], available_width: f64) -> Vec<PlacedItem> {
        let insets = self.insets();
        let spacing = self.spacing();

        let mut placed = Vec::with_capacity(lines.iter().map(Line::len).sum());
        let mut y = insets.top;

        for (line_index, line) in lines.iter().enumerate() {
            let mut x = insets.left + line.offset(self.config.alignment, available_width);
            for item in &line.items {
                placed.push(PlacedItem {
                    index: item.index,
                    frame: Frame::from_origin(x, y, item.size),
                    line: line_index,
                });
                x += item.size.width + spacing.horizontal;
            }
            y += line.max_height + spacing.vertical;
        }

        placed
    }

    /// Total content height: rows, inter-row spacing and vertical insets.
    pub fn content_height(&self, lines: &[Line]) -> f64 {
        let insets = self.insets();
        let rows: f64 = lines.iter().map(|line| line.max_height).sum();
        let gaps = self.spacing().vertical * lines.len().saturating_sub(1) as f64;
        (insets.vertical() + rows + gaps).max(0.0)
    }

    /// Container and scroll heights for a finished pass.
    pub fn sizing(&self, result: &LayoutResult) -> Sizing {
        let content = result.content_height.max(MIN_CONTAINER_HEIGHT);
        let container_height = match self.config.height_mode {
            HeightMode::Adaptive => content,
            HeightMode::Fixed(height) => height,
        };
        Sizing {
            container_height,
            scroll_content_height: content,
            scroll_content_width: result.resolved_width,
        }
    }

    /// Height the container asks for: content height when adaptive, the
    /// fixed height otherwise.
    pub fn intrinsic_height<M: Measure>(&self, items: &[M], container_width: f64) -> f64 {
        match self.config.height_mode {
            HeightMode::Adaptive => self.layout(items, container_width).content_height,
            HeightMode::Fixed(height) => height,
        }
    }

    /// Smallest container size that shows every item without wrapping:
    /// one row holding all items, plus insets.
    pub fn single_line_size<M: Measure>(&self, items: &[M]) -> Size {
        let insets = self.insets();
        let spacing = self.spacing().horizontal;
        let mut width = 0.0_f64;
        let mut height = 0.0_f64;
        for (i, item) in items.iter().enumerate() {
            let size = item.measure(f64::INFINITY).non_negative();
            if i > 0 {
                width += spacing;
            }
            width += size.width;
            height = height.max(size.height);
        }
        Size::new(width + insets.horizontal(), height + insets.vertical())
    }
}
