//! Core value types for flow layout.

use crate::errors::{Axis, ConfigError, Edge};

/// A width/height pair.
///
/// Zero is a valid size (an empty container or an invisible tag).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp negative and NaN components to zero. Positive infinity is kept:
    /// an unbounded item still overflows onto a row of its own.
    pub fn non_negative(self) -> Self {
        let clamp = |value: f64| if value > 0.0 { value } else { 0.0 };
        Self {
            width: clamp(self.width),
            height: clamp(self.height),
        }
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

/// Content padding, applied once at the container boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub const ZERO: Self = Self { top: 0.0, left: 0.0, bottom: 0.0, right: 0.0 };

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// Create uniform insets.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    /// Create symmetric insets: `horizontal` for left/right, `vertical` for top/bottom.
    pub fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            top: vertical,
            left: horizontal,
            bottom: vertical,
            right: horizontal,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Check that every edge is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (edge, value) in [
            (Edge::Top, self.top),
            (Edge::Left, self.left),
            (Edge::Bottom, self.bottom),
            (Edge::Right, self.right),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue { field: "insets" });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeInset { edge, value });
            }
        }
        Ok(())
    }

    /// Replace negative or non-finite edges with zero.
    pub fn clamped(self) -> Self {
        Self {
            top: non_negative(self.top),
            left: non_negative(self.left),
            bottom: non_negative(self.bottom),
            right: non_negative(self.right),
        }
    }
}

/// Gaps between items in a row and between rows.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Spacing {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

impl Spacing {
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self { horizontal, vertical }
    }

    pub const fn uniform(value: f64) -> Self {
        Self { horizontal: value, vertical: value }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [(Axis::Horizontal, self.horizontal), (Axis::Vertical, self.vertical)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue { field: "spacing" });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeSpacing { axis, value });
            }
        }
        Ok(())
    }

    /// Replace negative or non-finite gaps with zero.
    pub fn clamped(self) -> Self {
        Self {
            horizontal: non_negative(self.horizontal),
            vertical: non_negative(self.vertical),
        }
    }
}

/// Distribution of leftover horizontal space within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LineAlignment {
    /// Pack items at the left edge
    #[default]
    Left,
    /// Center each row
    Center,
    /// Pack items at the right edge
    Right,
}

/// How the container derives its own height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeightMode {
    /// Container height follows the packed content
    #[default]
    Adaptive,
    /// Container height is constant; content scrolls inside it
    Fixed(f64),
}

impl HeightMode {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            HeightMode::Adaptive => Ok(()),
            HeightMode::Fixed(value) if !value.is_finite() => {
                Err(ConfigError::NonFiniteValue { field: "height_mode" })
            }
            HeightMode::Fixed(value) if value <= 0.0 => Err(ConfigError::InvalidFixedHeight { value }),
            HeightMode::Fixed(_) => Ok(()),
        }
    }

    pub fn is_adaptive(&self) -> bool {
        matches!(self, HeightMode::Adaptive)
    }
}

/// An RGBA color. Carried through to render hosts, never read by layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const SYSTEM_BLUE: Self = Self::rgb(0.0, 122.0 / 255.0, 1.0);
    pub const SYSTEM_RED: Self = Self::rgb(1.0, 59.0 / 255.0, 48.0 / 255.0);
    pub const SYSTEM_GRAY5: Self = Self::rgb(229.0 / 255.0, 229.0 / 255.0, 234.0 / 255.0);
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insets_helpers() {
        let insets = Insets::symmetric(16.0, 8.0);
        assert!((insets.horizontal() - 32.0).abs() < 0.001);
        assert!((insets.vertical() - 16.0).abs() < 0.001);
        assert!((insets.left - 16.0).abs() < 0.001);
        assert!((insets.top - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_insets_validate() {
        assert!(Insets::uniform(4.0).validate().is_ok());
        let err = Insets::new(0.0, -2.0, 0.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::NegativeInset { edge: Edge::Left, .. }));
        let err = Insets::new(f64::NAN, 0.0, 0.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::NonFiniteValue { .. }));
    }

    #[test]
    fn test_clamped_values() {
        let insets = Insets::new(-1.0, f64::INFINITY, 3.0, f64::NAN).clamped();
        assert_eq!(insets, Insets::new(0.0, 0.0, 3.0, 0.0));

        let spacing = Spacing::new(-5.0, 6.0).clamped();
        assert_eq!(spacing, Spacing::new(0.0, 6.0));
    }

    #[test]
    fn test_spacing_default_matches_widget() {
        let spacing = Spacing::default();
        assert!((spacing.horizontal - 10.0).abs() < 0.001);
        assert!((spacing.vertical - 10.0).abs() < 0.001);
        assert!(matches!(
            Spacing::new(1.0, -1.0).validate(),
            Err(ConfigError::NegativeSpacing { axis: Axis::Vertical, .. })
        ));
    }

    #[test]
    fn test_height_mode_validate() {
        assert!(HeightMode::Adaptive.validate().is_ok());
        assert!(HeightMode::Fixed(120.0).validate().is_ok());
        assert!(matches!(
            HeightMode::Fixed(0.0).validate(),
            Err(ConfigError::InvalidFixedHeight { .. })
        ));
        assert!(HeightMode::Adaptive.is_adaptive());
        assert!(!HeightMode::Fixed(1.0).is_adaptive());
    }

    #[test]
    fn test_system_colors_are_opaque() {
        for color in [Color::WHITE, Color::SYSTEM_BLUE, Color::SYSTEM_RED, Color::SYSTEM_GRAY5] {
            assert!((color.a - 1.0).abs() < 0.001);
        }
        assert!((Color::SYSTEM_BLUE.g - 122.0 / 255.0).abs() < 0.001);
        assert_eq!(Color::rgba(0.5, 0.5, 0.5, 1.0), Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_size_non_negative() {
        let size = Size::new(-3.0, f64::NAN).non_negative();
        assert_eq!(size, Size::ZERO);
        assert_eq!(Size::new(f64::NEG_INFINITY, 2.0).non_negative(), Size::new(0.0, 2.0));

        let unbounded = Size::new(f64::INFINITY, 20.0).non_negative();
        assert_eq!(unbounded.width, f64::INFINITY);
        assert_eq!(Size::from((4.0, 5.0)), Size::new(4.0, 5.0));
    }
}
