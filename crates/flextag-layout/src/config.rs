//! Layout configuration.

use flextag_core::{ConfigError, HeightMode, Insets, LineAlignment, Spacing};

/// Default floor for the resolved container width.
pub const DEFAULT_MIN_CONTAINER_WIDTH: f64 = 100.0;

/// Default stand-in for the last known screen width.
pub const DEFAULT_FALLBACK_WIDTH: f64 = 375.0;

/// Everything that shapes a flow layout pass apart from the items and the
/// container width.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Content padding around all rows
    pub insets: Insets,
    /// Gap between items (horizontal) and between rows (vertical)
    pub spacing: Spacing,
    /// Placement of each row's leftover width
    pub alignment: LineAlignment,
    /// Adaptive or fixed container height
    pub height_mode: HeightMode,
    /// Smallest container width a pass will lay out against
    pub min_container_width: f64,
    /// Width used when the container has not reported a positive width yet.
    /// Horizontal insets are subtracted from it before use.
    pub fallback_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            insets: Insets::ZERO,
            spacing: Spacing::default(),
            alignment: LineAlignment::Left,
            height_mode: HeightMode::Adaptive,
            min_container_width: DEFAULT_MIN_CONTAINER_WIDTH,
            fallback_width: DEFAULT_FALLBACK_WIDTH,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Set uniform insets.
    pub fn with_uniform_insets(mut self, inset: f64) -> Self {
        self.insets = Insets::uniform(inset);
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_horizontal_spacing(mut self, spacing: f64) -> Self {
        self.spacing.horizontal = spacing;
        self
    }

    pub fn with_vertical_spacing(mut self, spacing: f64) -> Self {
        self.spacing.vertical = spacing;
        self
    }

    pub fn with_alignment(mut self, alignment: LineAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_height_mode(mut self, height_mode: HeightMode) -> Self {
        self.height_mode = height_mode;
        self
    }

    pub fn with_min_container_width(mut self, width: f64) -> Self {
        self.min_container_width = width;
        self
    }

    pub fn with_fallback_width(mut self, width: f64) -> Self {
        self.fallback_width = width;
        self
    }

    /// Reject negative or non-finite geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.insets.validate()?;
        self.spacing.validate()?;
        self.height_mode.validate()?;
        if !self.min_container_width.is_finite() {
            return Err(ConfigError::NonFiniteValue { field: "min_container_width" });
        }
        if !self.fallback_width.is_finite() {
            return Err(ConfigError::NonFiniteValue { field: "fallback_width" });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document. Missing fields take
    /// their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }
}
