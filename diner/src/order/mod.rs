use common::api::MenuId;

/// The in-progress order for one sitting. Ids may repeat (two coffees are
/// two entries). Nothing is persisted; a restart starts from an empty order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    pub menu_ids: Vec<MenuId>,
}

/// Handle returned by [`OrderStore::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Order)>;

/// Holds the current order and tells listeners whenever it changes.
///
/// Single logical owner: mutation goes through `&mut self`, so the store
/// lives with whoever drives the UI and is never shared across threads.
#[derive(Default)]
pub struct OrderStore {
    order: Order,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Listener)>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_order(&self) -> &Order {
        &self.order
    }

    /// Swap in a new order, then invoke every listener exactly once with the
    /// new state. Cannot fail.
    pub fn replace_order(&mut self, order: Order) {
        self.order = order;
        for (_, listener) in self.subscribers.iter_mut() {
            listener(&self.order);
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Order) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Unknown or already-removed handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }
}
