//! # Cart Store
//!
//! A [`Cart`] plus synchronous change notification.
//!
//! The screens do not poll the cart. They subscribe once and are called back
//! right after every mutation, in the same call stack, with an event saying
//! what happened and the cart as it now is.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Mutation & Notification                              │
//! │                                                                         │
//! │   store.add(item)                                                       │
//! │        │                                                                │
//! │        ├── 1. cart.add(item)                                            │
//! │        │                                                                │
//! │        └── 2. for each listener (subscription order):                   │
//! │                  listener(&CartEvent::Added { .. }, &cart)              │
//! │                                                                         │
//! │   No batching, no coalescing: one mutation, one notification round.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Listeners receive `&Cart` and cannot mutate it.

use std::fmt;

use serde::Serialize;
use ts_rs::TS;

use crate::cart::{Cart, LineItem};

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    Added { name: String },
    Removed { name: String, count: usize },
    Updated { name: String, count: usize },
    Cleared { count: usize },
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&CartEvent, &Cart) + Send + Sync>;

/// The single mutation surface of the cart.
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl CartStore {
    /// Creates a store around an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers a listener called after every mutation.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    /// use teacart_core::{CartStore, LineItem, Money};
    ///
    /// let mut store = CartStore::new();
    /// let seen = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&seen);
    /// store.subscribe(move |_event, cart| {
    ///     counter.store(cart.len(), Ordering::SeqCst);
    /// });
    ///
    /// store.add(LineItem::new("Trà xanh nóng", "", Money::from_dong(2_000), 1).unwrap());
    /// assert_eq!(seen.load(Ordering::SeqCst), 1);
    /// ```
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent, &Cart) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drops a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// See [`Cart::add`].
    pub fn add(&mut self, item: LineItem) {
        let name = item.name().to_string();
        self.cart.add(item);
        self.notify(CartEvent::Added { name });
    }

    /// See [`Cart::remove`].
    pub fn remove(&mut self, item: &LineItem) -> usize {
        self.remove_named(item.name())
    }

    /// See [`Cart::remove_named`].
    pub fn remove_named(&mut self, name: &str) -> usize {
        let count = self.cart.remove_named(name);
        self.notify(CartEvent::Removed {
            name: name.to_string(),
            count,
        });
        count
    }

    /// See [`Cart::update`].
    pub fn update(&mut self, item: LineItem) -> usize {
        let name = item.name().to_string();
        let count = self.cart.update(item);
        self.notify(CartEvent::Updated { name, count });
        count
    }

    /// See [`Cart::clear`].
    pub fn clear(&mut self) -> usize {
        let count = self.cart.clear();
        self.notify(CartEvent::Cleared { count });
        count
    }

    fn notify(&self, event: CartEvent) {
        for (_, listener) in &self.listeners {
            listener(&event, &self.cart);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
