//! Error types for flextag.
//!
//! Layout itself is total: degenerate geometry is tolerated, not reported.
//! The only failures are rejected configuration values and taps that refer
//! to an item that no longer exists.

use std::fmt;

use thiserror::Error;

/// One side of an [`Insets`](crate::Insets) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Top => "top",
            Edge::Left => "left",
            Edge::Bottom => "bottom",
            Edge::Right => "right",
        };
        f.write_str(name)
    }
}

/// Spacing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Between items in a row
    Horizontal,
    /// Between rows
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Errors raised while validating or loading a layout configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Inset {edge} must be non-negative, got {value}")]
    NegativeInset { edge: Edge, value: f64 },

    #[error("{axis} spacing must be non-negative, got {value}")]
    NegativeSpacing { axis: Axis, value: f64 },

    #[error("Fixed height must be positive, got {value}")]
    InvalidFixedHeight { value: f64 },

    #[error("Configuration value '{field}' is not finite")]
    NonFiniteValue { field: &'static str },

    #[cfg(feature = "serde")]
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A tap that could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TapError {
    #[error("Tag tapped with invalid index {index}, tag count: {len}")]
    Stale { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::NegativeInset { edge: Edge::Left, value: -4.0 };
        assert_eq!(err.to_string(), "Inset left must be non-negative, got -4");

        let err = ConfigError::NegativeSpacing { axis: Axis::Vertical, value: -1.5 };
        assert_eq!(err.to_string(), "vertical spacing must be non-negative, got -1.5");

        let err = TapError::Stale { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Tag tapped with invalid index 7, tag count: 3");
    }
}
