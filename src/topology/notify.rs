use std::fmt;

use slotmap::SlotMap;

use crate::geometry::Point;

use super::section::{End, SectionId};

slotmap::new_key_type! {
    /// Handle returned by [`RouteStore::subscribe`](super::RouteStore::subscribe).
    pub struct SubscriptionId;
}

/// Emitted whenever the store moves a section endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointChanged {
    pub section: SectionId,
    pub end: End,
    pub old: Point,
    pub new: Point,
}

/// Callback invoked synchronously for each matching [`PointChanged`].
///
/// Callbacks only see the event; they have no path back into the store.
pub type PointCallback = Box<dyn FnMut(&PointChanged)>;

struct Subscription {
    section: SectionId,
    end: End,
    callback: PointCallback,
}

/// Subscription registry owned by the route store.
#[derive(Default)]
pub(crate) struct Notifier {
    subscriptions: SlotMap<SubscriptionId, Subscription>,
    // Slot map iteration order is not insertion order.
    order: Vec<SubscriptionId>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("subscriptions", &self.order.len())
            .finish()
    }
}

impl Notifier {
    pub(crate) fn subscribe(
        &mut self,
        section: SectionId,
        end: End,
        callback: PointCallback,
    ) -> SubscriptionId {
        let id = self.subscriptions.insert(Subscription {
            section,
            end,
            callback,
        });
        self.order.push(id);
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if self.subscriptions.remove(id).is_none() {
            return false;
        }
        self.order.retain(|other| *other != id);
        true
    }

    /// Drops every subscription attached to a removed section.
    pub(crate) fn forget_section(&mut self, section: SectionId) {
        self.subscriptions.retain(|_, sub| sub.section != section);
        let subscriptions = &self.subscriptions;
        self.order.retain(|id| subscriptions.contains_key(*id));
    }

    pub(crate) fn emit(&mut self, event: &PointChanged) {
        for id in &self.order {
            if let Some(sub) = self.subscriptions.get_mut(*id) {
                if sub.section == event.section && sub.end == event.end {
                    (sub.callback)(event);
                }
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}
