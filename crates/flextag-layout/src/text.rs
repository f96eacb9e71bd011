//! Text metrics for tag measurement.
//!
//! Real hosts measure text with their own font stack and plug it in through
//! [`TextMeasure`]. [`EstimatedText`] is a character-count approximation that
//! keeps layout usable (and testable) without one.

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE_EM: f64 = 0.55;

/// Font parameters that affect text extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    /// Multiplier of `font_size`
    pub line_height: f64,
    /// Added to every glyph advance
    pub letter_spacing: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle::with_font_size(14.0)
    }
}

impl TextStyle {
    pub fn with_font_size(font_size: f64) -> Self {
        TextStyle {
            font_size,
            line_height: 1.2,
            letter_spacing: 0.0,
        }
    }

    fn line_extent(&self) -> f64 {
        self.font_size * self.line_height
    }

    fn glyph_advance(&self) -> f64 {
        self.font_size * GLYPH_ADVANCE_EM + self.letter_spacing
    }
}

/// Extent of a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Widest line
    pub width: f64,
    pub height: f64,
    pub lines: u32,
}

impl TextMetrics {
    fn from_lines(widest: f64, lines: u32, style: &TextStyle) -> Self {
        TextMetrics {
            width: widest,
            height: f64::from(lines) * style.line_extent(),
            lines,
        }
    }
}

/// Text measurement capability supplied by the host.
pub trait TextMeasure {
    /// Measure `text`. `None` means a single unbounded line; `Some(w)` wraps
    /// at word boundaries to fit `w` where possible.
    fn measure_text(&self, text: &str, style: &TextStyle, max_width: Option<f64>) -> TextMetrics;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure_text(&self, text: &str, style: &TextStyle, max_width: Option<f64>) -> TextMetrics {
        (**self).measure_text(text, style, max_width)
    }
}

/// Character-count based text measurement.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedText;

impl TextMeasure for EstimatedText {
    fn measure_text(&self, text: &str, style: &TextStyle, max_width: Option<f64>) -> TextMetrics {
        measure_text(text, style, max_width)
    }
}

/// Estimate the extent of `text`. Blank text still occupies one line.
pub fn measure_text(text: &str, style: &TextStyle, max_width: Option<f64>) -> TextMetrics {
    if text.trim().is_empty() {
        return TextMetrics::from_lines(0.0, 1, style);
    }

    let advance = style.glyph_advance();
    match max_width.filter(|width| *width > 0.0) {
        Some(width) => wrap_words(text, advance, width, style),
        None => TextMetrics::from_lines(text.chars().count() as f64 * advance, 1, style),
    }
}

/// Greedy word wrap. A word wider than `max_width` gets a line of its own
/// and is not broken.
fn wrap_words(text: &str, advance: f64, max_width: f64, style: &TextStyle) -> TextMetrics {
    let mut widest = 0.0_f64;
    let mut lines = 0u32;
    let mut line: Option<f64> = None;

    for word in text.split_whitespace() {
        let word_width = word.chars().count() as f64 * advance;
        line = match line {
            Some(width) if width + advance + word_width <= max_width => Some(width + advance + word_width),
            Some(width) => {
                widest = widest.max(width);
                lines += 1;
                Some(word_width)
            }
            None => Some(word_width),
        };
    }

    if let Some(width) = line {
        widest = widest.max(width);
        lines += 1;
    }
    TextMetrics::from_lines(widest, lines.max(1), style)
}
