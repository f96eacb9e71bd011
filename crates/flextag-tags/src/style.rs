//! Visual defaults carried alongside tags.
//!
//! Only `font_size` reaches measurement (of text tags). The rest is handed
//! through untouched to whatever renders the tags.

use flextag_core::Color;
use flextag_layout::TextStyle;

/// Per-view defaults applied to text tags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagStyle {
    pub corner_radius: f64,
    pub font_size: f64,
    pub background: Color,
    pub text_color: Color,
}

impl Default for TagStyle {
    fn default() -> Self {
        Self {
            corner_radius: 4.0,
            font_size: 14.0,
            background: Color::SYSTEM_BLUE,
            text_color: Color::WHITE,
        }
    }
}

impl TagStyle {
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_colors(mut self, background: Color, text_color: Color) -> Self {
        self.background = background;
        self.text_color = text_color;
        self
    }

    pub(crate) fn text_style(&self) -> TextStyle {
        TextStyle::with_font_size(self.font_size)
    }
}

/// Look of a button tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Destructive,
}

impl ButtonStyle {
    pub fn background(&self) -> Color {
        match self {
            ButtonStyle::Primary => Color::SYSTEM_BLUE,
            ButtonStyle::Secondary => Color::SYSTEM_GRAY5,
            ButtonStyle::Destructive => Color::SYSTEM_RED,
        }
    }

    pub fn title_color(&self) -> Color {
        match self {
            ButtonStyle::Secondary => Color::SYSTEM_BLUE,
            ButtonStyle::Primary | ButtonStyle::Destructive => Color::WHITE,
        }
    }
}
