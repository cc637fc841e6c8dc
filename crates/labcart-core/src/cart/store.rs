//! In-memory cart store with synchronous change notification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{CartItem, CartKey, FulfillmentType};

/// Handle returned by [`CartStore::subscribe`].
pub type SubscriptionId = u64;

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    Added(CartKey),
    Removed(CartKey),
    Cleared { removed: usize },
    /// Items settled by a confirmed booking
    Booked { removed: usize },
}

/// Notification delivered to subscribers after each effective mutation.
///
/// Carries the post-change badge numbers so listeners never need to read
/// the store back while it is being mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEvent {
    pub change: CartChange,
    pub count: usize,
    pub total: u64,
}

type Listener = Box<dyn Fn(&CartEvent) + Send + Sync>;

/// Cart items rendered under one lab heading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabGroup {
    pub pathology_name: String,
    pub items: Vec<CartItem>,
    pub subtotal: u64,
}

/// Single source of truth for the tests selected in a session.
///
/// Items are unique by `(id, fulfillment)` and kept in insertion order.
#[derive(Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item unless one with the same `(id, fulfillment)` is present.
    ///
    /// Returns `false` and leaves the cart untouched on a duplicate key.
    pub fn add_item(&mut self, item: CartItem) -> bool {
        let key = item.key();
        if self.contains(&key) {
            tracing::debug!(item = %key, "duplicate cart item rejected");
            return false;
        }

        tracing::debug!(item = %key, price = item.price, "cart item added");
        self.items.push(item);
        self.notify(CartChange::Added(key));
        true
    }

    /// Remove the item with the given key.
    pub fn remove_item(&mut self, key: &CartKey) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.matches(key))?;
        let removed = self.items.remove(index);
        tracing::debug!(item = %key, "cart item removed");
        self.notify(CartChange::Removed(removed.key()));
        Some(removed)
    }

    /// Remove the first item with the given id, whatever its fulfillment.
    pub fn remove_by_id(&mut self, id: &str) -> Option<CartItem> {
        let key = self.items.iter().find(|item| item.id == id)?.key();
        self.remove_item(&key)
    }

    /// Remove every item. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        if removed > 0 {
            tracing::debug!(removed, "cart cleared");
            self.notify(CartChange::Cleared { removed });
        }
        removed
    }

    /// Remove the items a confirmed booking paid for, keeping anything
    /// added since the order was snapshotted. Listeners hear one event.
    pub fn remove_booked(&mut self, keys: &[CartKey]) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !keys.iter().any(|key| item.matches(key)));
        let removed = before - self.items.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = self.items.len(), "booked items removed");
            self.notify(CartChange::Booked { removed });
        }
        removed
    }

    /// Sum of item prices. No discounts, tax or currency conversion.
    pub fn total(&self) -> u64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Number of line items (badge count).
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Owned copy of the current items, for an order.
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.items.clone()
    }

    pub fn contains(&self, key: &CartKey) -> bool {
        self.items.iter().any(|item| item.matches(key))
    }

    /// Whether any item needs a scheduled home collection.
    pub fn has_home_collection(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.fulfillment == FulfillmentType::HomeCollection)
    }

    /// Items grouped by lab name, labs in first-seen order.
    pub fn group_by_lab(&self) -> Vec<LabGroup> {
        let mut groups: Vec<LabGroup> = Vec::new();
        for item in &self.items {
            match groups
                .iter_mut()
                .find(|g| g.pathology_name == item.pathology_name)
            {
                Some(group) => {
                    group.subtotal += item.price;
                    group.items.push(item.clone());
                }
                None => groups.push(LabGroup {
                    pathology_name: item.pathology_name.clone(),
                    items: vec![item.clone()],
                    subtotal: item.price,
                }),
            }
        }
        groups
    }

    /// Register a listener called synchronously after each effective change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent) + Send + Sync + 'static,
    {
        self.next_subscription += 1;
        let id = self.next_subscription;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&self, change: CartChange) {
        if self.listeners.is_empty() {
            return;
        }
        let event = CartEvent {
            change,
            count: self.count(),
            total: self.total(),
        };
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }
}
