//! The heterogeneous tag list element.

use std::sync::Arc;

use flextag_core::Size;
use flextag_layout::{EstimatedText, Measure, TextMeasure, TextStyle};

use crate::custom::CustomTag;
use crate::style::{ButtonStyle, TagStyle};

/// Inner padding of a text tag.
pub const TEXT_TAG_PADDING: f64 = 10.0;

/// Inner padding of an image+text tag.
pub const IMAGE_TAG_PADDING: f64 = 8.0;
/// Icon edge length of an image+text tag.
pub const IMAGE_TAG_ICON_SIZE: f64 = 16.0;
/// Gap between icon and label of an image+text tag.
pub const IMAGE_TAG_ICON_SPACING: f64 = 4.0;

/// Extra width around a button title.
pub const BUTTON_TAG_TITLE_PADDING: f64 = 16.0;
pub const BUTTON_TAG_MIN_WIDTH: f64 = 60.0;
pub const BUTTON_TAG_MIN_HEIGHT: f64 = 32.0;

const FIXED_FONT_SIZE: f64 = 14.0;

/// A plain text chip.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTag {
    text: String,
    identifier: String,
    padding: f64,
}

impl TextTag {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            identifier: text.clone(),
            text,
            padding: TEXT_TAG_PADDING,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Single line when it fits; otherwise fill the budget and wrap.
    fn measure(&self, max_width: f64, text: &dyn TextMeasure, style: &TextStyle) -> Size {
        let inset = self.padding * 2.0;
        let ideal = text.measure_text(&self.text, style, None);
        let ideal_width = ideal.width.ceil() + inset;

        if ideal_width <= max_width {
            Size::new(ideal_width, ideal.height + inset)
        } else {
            let wrapped = text.measure_text(&self.text, style, Some(max_width - inset));
            Size::new(max_width, wrapped.height.ceil() + inset)
        }
    }
}

/// An icon followed by a label.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTextTag {
    text: String,
    image: String,
    identifier: String,
}

impl ImageTextTag {
    pub fn new(text: impl Into<String>, image: impl Into<String>) -> Self {
        let text = text.into();
        let image = image.into();
        Self {
            identifier: format!("{text}_{image}"),
            text,
            image,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Image name, resolved by the render host.
    pub fn image(&self) -> &str {
        &self.image
    }

    fn measure(&self, max_width: f64, text: &dyn TextMeasure) -> Size {
        let inset = IMAGE_TAG_PADDING * 2.0;
        let icon = IMAGE_TAG_ICON_SIZE + IMAGE_TAG_ICON_SPACING;
        let label_budget = (max_width - inset - icon).max(0.0);

        let label = text.measure_text(
            &self.text,
            &TextStyle::with_font_size(FIXED_FONT_SIZE),
            Some(label_budget),
        );

        Size::new(
            (icon + label.width + inset).min(max_width),
            IMAGE_TAG_ICON_SIZE.max(label.height) + inset,
        )
    }
}

/// A tappable button chip.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonTag {
    title: String,
    style: ButtonStyle,
    identifier: String,
}

impl ButtonTag {
    pub fn new(title: impl Into<String>, style: ButtonStyle) -> Self {
        let title = title.into();
        Self {
            identifier: title.clone(),
            title,
            style,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    /// Buttons keep their natural size regardless of the budget.
    fn measure(&self, text: &dyn TextMeasure) -> Size {
        let title = text.measure_text(&self.title, &TextStyle::with_font_size(FIXED_FONT_SIZE), None);
        Size::new(
            (title.width + BUTTON_TAG_TITLE_PADDING).max(BUTTON_TAG_MIN_WIDTH),
            title.height.max(BUTTON_TAG_MIN_HEIGHT),
        )
    }
}

/// One entry of a tag list.
#[derive(Debug, Clone)]
pub enum Tag {
    Text(TextTag),
    ImageText(ImageTextTag),
    Button(ButtonTag),
    Custom(Arc<dyn CustomTag>),
}

impl Tag {
    pub fn text(text: impl Into<String>) -> Self {
        Tag::Text(TextTag::new(text))
    }

    pub fn image_text(text: impl Into<String>, image: impl Into<String>) -> Self {
        Tag::ImageText(ImageTextTag::new(text, image))
    }

    pub fn button(title: impl Into<String>, style: ButtonStyle) -> Self {
        Tag::Button(ButtonTag::new(title, style))
    }

    pub fn custom(tag: impl CustomTag + 'static) -> Self {
        Tag::Custom(Arc::new(tag))
    }

    pub fn identifier(&self) -> &str {
        match self {
            Tag::Text(tag) => &tag.identifier,
            Tag::ImageText(tag) => &tag.identifier,
            Tag::Button(tag) => &tag.identifier,
            Tag::Custom(tag) => tag.identifier(),
        }
    }

    /// Short kind name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Tag::Text(_) => "text",
            Tag::ImageText(_) => "image_text",
            Tag::Button(_) => "button",
            Tag::Custom(_) => "custom",
        }
    }

    /// Preferred size for `max_width`, measuring text with `text`.
    /// `style` applies to text tags only.
    pub fn measure_with(&self, max_width: f64, text: &dyn TextMeasure, style: &TagStyle) -> Size {
        match self {
            Tag::Text(tag) => tag.measure(max_width, text, &style.text_style()),
            Tag::ImageText(tag) => tag.measure(max_width, text),
            Tag::Button(tag) => tag.measure(text),
            Tag::Custom(tag) => tag.measure(max_width, text),
        }
    }

    /// Bind this tag to a text measurer and style for a layout pass.
    pub fn measured<'a>(&'a self, text: &'a dyn TextMeasure, style: &'a TagStyle) -> MeasuredTag<'a> {
        MeasuredTag { tag: self, text, style }
    }
}

impl From<TextTag> for Tag {
    fn from(tag: TextTag) -> Self {
        Tag::Text(tag)
    }
}

impl From<ImageTextTag> for Tag {
    fn from(tag: ImageTextTag) -> Self {
        Tag::ImageText(tag)
    }
}

impl From<ButtonTag> for Tag {
    fn from(tag: ButtonTag) -> Self {
        Tag::Button(tag)
    }
}

impl From<&str> for Tag {
    fn from(text: &str) -> Self {
        Tag::text(text)
    }
}

impl From<String> for Tag {
    fn from(text: String) -> Self {
        Tag::text(text)
    }
}

/// Measures with estimated text metrics and the default style.
impl Measure for Tag {
    fn measure(&self, max_width: f64) -> Size {
        self.measure_with(max_width, &EstimatedText, &TagStyle::default())
    }
}

/// A tag paired with the text measurer and style of its container.
#[derive(Clone, Copy)]
pub struct MeasuredTag<'a> {
    tag: &'a Tag,
    text: &'a dyn TextMeasure,
    style: &'a TagStyle,
}

impl Measure for MeasuredTag<'_> {
    fn measure(&self, max_width: f64) -> Size {
        self.tag.measure_with(max_width, self.text, self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flextag_layout::TextMetrics;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_text_tag_fits() {
        let size = Tag::text("Swift").measure(200.0);
        // 5 * 7.7 = 38.5 -> 39, plus 2 * 10 padding
        assert!(approx(size.width, 59.0));
        assert!(approx(size.height, 36.8));
    }

    #[test]
    fn test_text_tag_wraps_when_too_wide() {
        let size = Tag::text("Hello world again").measure(100.0);
        assert!(approx(size.width, 100.0));
        // Three wrapped lines of 16.8 -> 50.4 -> 51
        assert!(approx(size.height, 71.0));
    }

    #[test]
    fn test_text_tag_uses_style_font_size() {
        let tag = Tag::text("Swift");
        let small = tag.measure_with(500.0, &EstimatedText, &TagStyle::default());
        let large = tag.measure_with(500.0, &EstimatedText, &TagStyle::default().with_font_size(28.0));
        assert!(large.width > small.width);
        assert!(large.height > small.height);
    }

    #[test]
    fn test_image_text_tag() {
        let size = Tag::image_text("Star", "star.fill").measure(200.0);
        // 16 + 4 + 30.8 + 16
        assert!(approx(size.width, 66.8));
        assert!(approx(size.height, 32.8));

        let clipped = Tag::image_text("Bookmarkasdadadasddsdsds", "bookmark.fill").measure(100.0);
        assert!(approx(clipped.width, 100.0));
    }

    #[test]
    fn test_button_tag_minimums() {
        let size = Tag::button("Edit", ButtonStyle::Primary).measure(10.0);
        assert!(approx(size.width, 60.0));
        assert!(approx(size.height, 32.0));

        let wide = Tag::button("Share this item", ButtonStyle::Secondary).measure(10.0);
        assert!(approx(wide.width, 131.5));
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(Tag::text("Swift").identifier(), "Swift");
        assert_eq!(Tag::image_text("Star", "star.fill").identifier(), "Star_star.fill");
        assert_eq!(Tag::button("Delete", ButtonStyle::Destructive).identifier(), "Delete");
        let tag: Tag = TextTag::new("iOS").with_identifier("platform").into();
        assert_eq!(tag.identifier(), "platform");
        assert_eq!(tag.kind(), "text");
    }

    #[derive(Debug)]
    struct Avatar {
        id: String,
    }

    impl CustomTag for Avatar {
        fn identifier(&self) -> &str {
            &self.id
        }

        fn measure(&self, max_width: f64, _text: &dyn TextMeasure) -> Size {
            Size::new(max_width.min(48.0), 48.0)
        }
    }

    #[test]
    fn test_custom_tag() {
        let tag = Tag::custom(Avatar { id: "avatar-1".into() });
        assert_eq!(tag.identifier(), "avatar-1");
        assert_eq!(tag.kind(), "custom");
        assert_eq!(tag.measure(30.0), Size::new(30.0, 48.0));
        assert_eq!(tag.clone().measure(100.0), Size::new(48.0, 48.0));
    }

    struct MonoText;

    impl TextMeasure for MonoText {
        fn measure_text(&self, text: &str, style: &TextStyle, _max_width: Option<f64>) -> TextMetrics {
            TextMetrics {
                width: text.chars().count() as f64 * 10.0,
                height: style.font_size,
                lines: 1,
            }
        }
    }

    #[test]
    fn test_measured_tag_uses_host_text() {
        let tag = Tag::text("abc");
        let style = TagStyle::default();
        let measured = tag.measured(&MonoText, &style);
        assert_eq!(measured.measure(500.0), Size::new(50.0, 34.0));
    }
}
