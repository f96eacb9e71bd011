//! The tag container.

use std::fmt;

use flextag_core::{ConfigError, HeightMode, Insets, LineAlignment, Spacing, TapError};
use flextag_layout::{EstimatedText, FlowLayout, LayoutConfig, LayoutResult, Sizing, TextMeasure};
use flextag_tags::{ButtonStyle, ImageTextTag, MeasuredTag, Tag, TagStyle};

use crate::events::{SubscriptionId, TapEvent, TapObservers};
use crate::handle::{Mutation, ViewHandle};
use crate::host::TagHost;
use crate::state::LayoutState;

/// A flow of tags inside a container of host-reported width.
///
/// Every mutation marks the view dirty. Nothing is recomputed until
/// [`tick`](Self::tick) (or [`layout_if_needed`](Self::layout_if_needed))
/// runs, so any number of changes between two ticks cost one pass.
pub struct TagView {
    items: Vec<Tag>,
    layout: FlowLayout,
    style: TagStyle,
    text: Box<dyn TextMeasure>,
    container_width: f64,
    state: LayoutState,
    last: LayoutResult,
    passes: u64,
    observers: TapObservers,
    handle: ViewHandle,
}

impl Default for TagView {
    fn default() -> Self {
        Self::new()
    }
}

impl TagView {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            layout: FlowLayout::default(),
            style: TagStyle::default(),
            text: Box::new(EstimatedText),
            container_width: 0.0,
            state: LayoutState::Dirty,
            last: LayoutResult::default(),
            passes: 0,
            observers: TapObservers::default(),
            handle: ViewHandle::default(),
        }
    }

    pub fn with_config(config: LayoutConfig) -> Result<Self, ConfigError> {
        let mut view = Self::new();
        view.set_config(config)?;
        Ok(view)
    }

    // -- Container width --------------------------------------------------

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Report the container's current width. Only a change invalidates, so a
    /// host may report the same width after every applied pass.
    ///
    /// Any width that is not a positive finite number means "not measured
    /// yet" and is stored as `0.0`, so repeated NaN reports compare equal.
    pub fn set_container_width(&mut self, width: f64) {
        let width = if width > 0.0 && width.is_finite() { width } else { 0.0 };
        if self.container_width.to_bits() != width.to_bits() {
            self.container_width = width;
            self.invalidate();
        }
    }

    // -- Items --------------------------------------------------------------

    pub fn items(&self) -> &[Tag] {
        &self.items
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(Tag::identifier)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_items(&mut self, items: impl IntoIterator<Item = Tag>) {
        self.items = items.into_iter().collect();
        self.invalidate();
    }

    pub fn push(&mut self, tag: impl Into<Tag>) {
        self.items.push(tag.into());
        self.invalidate();
    }

    pub fn extend(&mut self, tags: impl IntoIterator<Item = Tag>) {
        self.items.extend(tags);
        self.invalidate();
    }

    /// Remove the tag at `index`. Out of range is a no-op and leaves the
    /// view clean.
    pub fn remove_at(&mut self, index: usize) -> Option<Tag> {
        if index >= self.items.len() {
            tracing::debug!(index, len = self.items.len(), "remove_at out of range, ignored");
            return None;
        }
        let removed = self.items.remove(index);
        self.invalidate();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.invalidate();
    }

    /// Replace the list with plain text tags.
    pub fn set_texts<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_items(texts.into_iter().map(Tag::text));
    }

    pub fn add_text_tag(&mut self, text: impl Into<String>) {
        self.push(Tag::text(text));
    }

    pub fn add_image_text_tag(&mut self, text: impl Into<String>, image: impl Into<String>) {
        self.push(ImageTextTag::new(text, image));
    }

    pub fn add_button_tag(&mut self, title: impl Into<String>, style: ButtonStyle) {
        self.push(Tag::button(title, style));
    }

    pub fn add_text_tags<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(texts.into_iter().map(Tag::text));
    }

    // -- Configuration ------------------------------------------------------

    pub fn config(&self) -> &LayoutConfig {
        self.layout.config()
    }

    /// Replace the whole configuration. Invalid configurations are rejected
    /// and leave the view unchanged.
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<(), ConfigError> {
        config.validate()?;
        *self.layout.config_mut() = config;
        self.invalidate();
        Ok(())
    }

    /// Negative or non-finite edges are clamped to zero.
    pub fn set_insets(&mut self, insets: Insets) {
        let insets = match insets.validate() {
            Ok(()) => insets,
            Err(error) => {
                tracing::warn!(%error, "clamping invalid insets");
                insets.clamped()
            }
        };
        self.layout.config_mut().insets = insets;
        self.invalidate();
    }

    pub fn set_uniform_insets(&mut self, inset: f64) {
        self.set_insets(Insets::uniform(inset));
    }

    pub fn set_symmetric_insets(&mut self, horizontal: f64, vertical: f64) {
        self.set_insets(Insets::symmetric(horizontal, vertical));
    }

    /// Negative or non-finite gaps are clamped to zero.
    pub fn set_spacing(&mut self, horizontal: f64, vertical: f64) {
        let spacing = Spacing::new(horizontal, vertical);
        let spacing = match spacing.validate() {
            Ok(()) => spacing,
            Err(error) => {
                tracing::warn!(%error, "clamping invalid spacing");
                spacing.clamped()
            }
        };
        self.layout.config_mut().spacing = spacing;
        self.invalidate();
    }

    pub fn set_uniform_spacing(&mut self, spacing: f64) {
        self.set_spacing(spacing, spacing);
    }

    pub fn set_horizontal_spacing(&mut self, spacing: f64) {
        let vertical = self.config().spacing.vertical;
        self.set_spacing(spacing, vertical);
    }

    pub fn set_vertical_spacing(&mut self, spacing: f64) {
        let horizontal = self.config().spacing.horizontal;
        self.set_spacing(horizontal, spacing);
    }

    pub fn configure_spacing(&mut self, insets: Insets, horizontal: f64, vertical: f64) {
        self.set_insets(insets);
        self.set_spacing(horizontal, vertical);
    }

    pub fn configure_layout(&mut self, alignment: LineAlignment, insets: Insets, horizontal: f64, vertical: f64) {
        self.set_alignment(alignment);
        self.configure_spacing(insets, horizontal, vertical);
    }

    pub fn set_alignment(&mut self, alignment: LineAlignment) {
        self.layout.config_mut().alignment = alignment;
        self.invalidate();
    }

    /// A fixed height must be finite and positive.
    pub fn set_height_mode(&mut self, height_mode: HeightMode) -> Result<(), ConfigError> {
        height_mode.validate()?;
        self.layout.config_mut().height_mode = height_mode;
        self.invalidate();
        Ok(())
    }

    pub fn style(&self) -> &TagStyle {
        &self.style
    }

    /// The style's font size feeds text tag measurement, so this invalidates.
    pub fn set_tag_style(&mut self, style: TagStyle) {
        self.style = style;
        self.invalidate();
    }

    /// Measure text with the host's font stack instead of the estimate.
    pub fn set_text_measure(&mut self, text: impl TextMeasure + 'static) {
        self.text = Box::new(text);
        self.invalidate();
    }

    // -- Layout -------------------------------------------------------------

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Frames from the most recent pass.
    pub fn last_layout(&self) -> &LayoutResult {
        &self.last
    }

    /// Container and scroll sizes for the most recent pass.
    pub fn sizing(&self) -> Sizing {
        self.layout.sizing(&self.last)
    }

    /// Number of layout passes run so far.
    pub fn pass_count(&self) -> u64 {
        self.passes
    }

    /// Height the container asks for at its current width.
    pub fn intrinsic_height(&self) -> f64 {
        self.layout.intrinsic_height(&self.measured_items(), self.container_width)
    }

    /// Apply queued mutations, then run a pass if anything changed.
    /// Returns whether a pass ran.
    pub fn layout_if_needed(&mut self) -> bool {
        self.apply_pending();
        if !self.state.take() {
            return false;
        }
        self.run_pass();
        true
    }

    /// Run a pass now, dirty or not.
    pub fn layout(&mut self) -> &LayoutResult {
        self.apply_pending();
        self.state.take();
        self.run_pass();
        &self.last
    }

    /// One host frame: at most one pass, pushed to `host` when it runs.
    pub fn tick(&mut self, host: &mut dyn TagHost) -> bool {
        if !self.layout_if_needed() {
            return false;
        }
        host.apply_layout(&self.last, &self.sizing());
        true
    }

    fn run_pass(&mut self) {
        let result = {
            let measured = self.measured_items();
            self.layout.layout(&measured, self.container_width)
        };
        self.last = result;
        self.passes += 1;
    }

    fn measured_items(&self) -> Vec<MeasuredTag<'_>> {
        self.items
            .iter()
            .map(|tag| tag.measured(&*self.text, &self.style))
            .collect()
    }

    fn invalidate(&mut self) {
        self.state.mark_dirty();
    }

    // -- Deferred mutations -------------------------------------------------

    /// Queue for changes requested while the view is borrowed.
    pub fn handle(&self) -> ViewHandle {
        self.handle.clone()
    }

    fn apply_pending(&mut self) {
        let pending = self.handle.drain();
        if pending.is_empty() {
            return;
        }
        tracing::debug!(count = pending.len(), "applying deferred mutations");
        for mutation in pending {
            self.apply(mutation);
        }
    }

    fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::SetItems(items) => self.set_items(items),
            Mutation::Push(tag) => self.push(tag),
            Mutation::Extend(tags) => self.extend(tags),
            Mutation::RemoveAt(index) => {
                self.remove_at(index);
            }
            Mutation::Clear => self.clear(),
            Mutation::SetContainerWidth(width) => self.set_container_width(width),
            Mutation::SetInsets(insets) => self.set_insets(insets),
            Mutation::SetSpacing(spacing) => self.set_spacing(spacing.horizontal, spacing.vertical),
            Mutation::SetAlignment(alignment) => self.set_alignment(alignment),
            Mutation::SetHeightMode(height_mode) => {
                if let Err(error) = self.set_height_mode(height_mode) {
                    tracing::warn!(%error, "deferred height mode rejected");
                }
            }
            Mutation::SetConfig(config) => {
                if let Err(error) = self.set_config(config) {
                    tracing::warn!(%error, "deferred config rejected");
                }
            }
        }
    }

    // -- Taps ---------------------------------------------------------------

    pub fn on_tap<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&TapEvent<'_>, &TagView) + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Topmost item under a point, using the last pass's frames.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.last.hit_test(x, y)
    }

    /// Forward a host activation on item `index` to the observers.
    ///
    /// A stale index (the item went away before the event arrived) is logged
    /// and dropped; returns whether the tap was delivered.
    pub fn tap(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            let error = TapError::Stale { index, len: self.items.len() };
            tracing::warn!(%error, "dropping tap");
            return false;
        }

        let mut observers = std::mem::take(&mut self.observers);
        let event = TapEvent { index, tag: &self.items[index] };
        observers.notify(&event, &*self);
        self.observers = observers;
        true
    }

    /// Hit-test a point and tap whatever is there.
    pub fn tap_at(&mut self, x: f64, y: f64) -> bool {
        match self.hit_test(x, y) {
            Some(index) => self.tap(index),
            None => false,
        }
    }
}

impl fmt::Debug for TagView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagView")
            .field("items", &self.items)
            .field("config", self.layout.config())
            .field("style", &self.style)
            .field("container_width", &self.container_width)
            .field("state", &self.state)
            .field("passes", &self.passes)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
