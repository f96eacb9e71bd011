//! Core types for flextag.
//!
//! Everything the flow layout consumes or produces as plain data lives here:
//! sizes, insets, spacing, row alignment, the container height mode, item
//! frames and the error taxonomy. The crate has no layout logic of its own.

pub mod errors;
pub mod geometry;
pub mod types;

pub use errors::{Axis, ConfigError, Edge, TapError};
pub use geometry::Frame;
pub use types::{Color, HeightMode, Insets, LineAlignment, Size, Spacing};

/// Render-host vector type used by [`Frame::origin_vec`] and [`Frame::extent_vec`].
pub use glam::Vec2;
