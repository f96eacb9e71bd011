//! Tap notification channel.
//!
//! Observers are plain closures keyed by a [`SubscriptionId`]. They receive
//! the tapped item by index and a shared reference to the view; changes they
//! want to make go through [`TagView::handle`] and land on the next tick.

use std::fmt;

use flextag_tags::Tag;
use indexmap::IndexMap;

use crate::view::TagView;

/// A tap on a live item.
#[derive(Debug, Clone, Copy)]
pub struct TapEvent<'a> {
    pub index: usize,
    pub tag: &'a Tag,
}

impl TapEvent<'_> {
    pub fn identifier(&self) -> &str {
        self.tag.identifier()
    }
}

/// Handle returned by [`TagView::on_tap`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub type TapObserver = Box<dyn FnMut(&TapEvent<'_>, &TagView)>;

/// Observers in subscription order.
#[derive(Default)]
pub(crate) struct TapObservers {
    next_id: u64,
    observers: IndexMap<SubscriptionId, TapObserver>,
}

impl TapObservers {
    pub(crate) fn subscribe(&mut self, observer: TapObserver) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, observer);
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.shift_remove(&id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn notify(&mut self, event: &TapEvent<'_>, view: &TagView) {
        for observer in self.observers.values_mut() {
            observer(event, view);
        }
    }
}

impl fmt::Debug for TapObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapObservers")
            .field("next_id", &self.next_id)
            .field("subscriptions", &self.observers.keys().collect::<Vec<_>>())
            .finish()
    }
}
