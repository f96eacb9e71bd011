//! The render host boundary.

use flextag_core::Vec2;
use flextag_layout::{LayoutResult, Sizing};

/// Receives finished layout passes. Implemented by whatever draws the tags.
pub trait TagHost {
    fn apply_layout(&mut self, result: &LayoutResult, sizing: &Sizing);
}

/// An item frame in the `f32` precision render backends draw with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRect {
    pub index: usize,
    pub origin: Vec2,
    pub extent: Vec2,
}

/// Convert a pass into render rectangles, in placement order.
pub fn render_rects(result: &LayoutResult) -> impl Iterator<Item = RenderRect> + '_ {
    result.items.iter().map(|placed| RenderRect {
        index: placed.index,
        origin: placed.frame.origin_vec(),
        extent: placed.frame.extent_vec(),
    })
}

/// A host that keeps every pass it receives, plus the render rectangles of
/// the latest one.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub passes: Vec<(LayoutResult, Sizing)>,
    pub rects: Vec<RenderRect>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&(LayoutResult, Sizing)> {
        self.passes.last()
    }

    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }
}

impl TagHost for RecordingHost {
    fn apply_layout(&mut self, result: &LayoutResult, sizing: &Sizing) {
        self.rects = render_rects(result).collect();
        self.passes.push((result.clone(), *sizing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flextag_core::Size;
    use flextag_layout::{FlowLayout, LayoutConfig};

    #[test]
    fn test_recording_host_keeps_render_rects() {
        let layout = FlowLayout::new(LayoutConfig::default());
        let sizes = [Size::new(50.0, 20.0), Size::new(60.0, 24.0)];
        let result = layout.layout(&sizes, 200.0);

        let mut host = RecordingHost::new();
        host.apply_layout(&result, &layout.sizing(&result));

        assert_eq!(host.pass_count(), 1);
        assert_eq!(host.rects.len(), 2);
        assert_eq!(host.rects[1].index, 1);
        assert_eq!(host.rects[1].origin, Vec2::new(60.0, 0.0));
        assert_eq!(host.rects[1].extent, Vec2::new(60.0, 24.0));
    }
}
