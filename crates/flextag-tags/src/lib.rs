//! Tag kinds and their measurement.
//!
//! A tag list is a `Vec<Tag>`. Every kind knows how to size itself for a
//! width budget, so a list can be handed straight to
//! [`FlowLayout::layout`](flextag_layout::FlowLayout::layout).

mod custom;
mod style;
mod tag;

pub use custom::CustomTag;
pub use style::{ButtonStyle, TagStyle};
pub use tag::{
    ButtonTag, ImageTextTag, MeasuredTag, Tag, TextTag, BUTTON_TAG_MIN_HEIGHT, BUTTON_TAG_MIN_WIDTH,
    BUTTON_TAG_TITLE_PADDING, IMAGE_TAG_ICON_SIZE, IMAGE_TAG_ICON_SPACING, IMAGE_TAG_PADDING, TEXT_TAG_PADDING,
};
