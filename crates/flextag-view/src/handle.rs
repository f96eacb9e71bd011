//! Deferred mutations.
//!
//! Code that runs while the view is borrowed (tap observers, custom tag
//! measurement) cannot mutate the view directly. It queues changes on a
//! [`ViewHandle`] instead; the view applies them at the start of its next
//! tick, so a layout pass never triggers another one from inside itself.

use std::cell::RefCell;
use std::rc::Rc;

use flextag_core::{HeightMode, Insets, LineAlignment, Spacing};
use flextag_layout::LayoutConfig;
use flextag_tags::Tag;

/// A change waiting for the next tick.
#[derive(Debug, Clone)]
pub enum Mutation {
    SetItems(Vec<Tag>),
    Push(Tag),
    Extend(Vec<Tag>),
    RemoveAt(usize),
    Clear,
    SetContainerWidth(f64),
    SetInsets(Insets),
    SetSpacing(Spacing),
    SetAlignment(LineAlignment),
    SetHeightMode(HeightMode),
    SetConfig(LayoutConfig),
}

/// Cloneable queue of [`Mutation`]s for one view.
#[derive(Debug, Clone, Default)]
pub struct ViewHandle {
    queue: Rc<RefCell<Vec<Mutation>>>,
}

impl ViewHandle {
    pub fn enqueue(&self, mutation: Mutation) {
        self.queue.borrow_mut().push(mutation);
    }

    pub fn set_items(&self, items: impl IntoIterator<Item = Tag>) {
        self.enqueue(Mutation::SetItems(items.into_iter().collect()));
    }

    pub fn push(&self, tag: impl Into<Tag>) {
        self.enqueue(Mutation::Push(tag.into()));
    }

    pub fn extend(&self, tags: impl IntoIterator<Item = Tag>) {
        self.enqueue(Mutation::Extend(tags.into_iter().collect()));
    }

    pub fn remove_at(&self, index: usize) {
        self.enqueue(Mutation::RemoveAt(index));
    }

    pub fn clear(&self) {
        self.enqueue(Mutation::Clear);
    }

    pub fn set_container_width(&self, width: f64) {
        self.enqueue(Mutation::SetContainerWidth(width));
    }

    pub fn set_alignment(&self, alignment: LineAlignment) {
        self.enqueue(Mutation::SetAlignment(alignment));
    }

    pub fn set_config(&self, config: LayoutConfig) {
        self.enqueue(Mutation::SetConfig(config));
    }

    /// Number of queued mutations.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub(crate) fn drain(&self) -> Vec<Mutation> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_queue() {
        let handle = ViewHandle::default();
        let other = handle.clone();
        other.push("Rust");
        other.remove_at(3);
        assert_eq!(handle.pending(), 2);

        let drained = handle.drain();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[1], Mutation::RemoveAt(3)));
        assert_eq!(other.pending(), 0);
    }
}
