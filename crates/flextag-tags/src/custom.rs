//! Host-defined tag kinds.

use std::fmt;

use flextag_core::Size;
use flextag_layout::TextMeasure;

/// A tag kind registered by the host at runtime.
///
/// The built-in kinds cover text, image+text and buttons; anything else
/// implements this trait and goes into a list as [`Tag::Custom`](crate::Tag::Custom).
pub trait CustomTag: fmt::Debug {
    /// Stable identifier, reported back with taps.
    fn identifier(&self) -> &str;

    /// Preferred size for a width budget. May exceed `max_width`.
    fn measure(&self, max_width: f64, text: &dyn TextMeasure) -> Size;
}
