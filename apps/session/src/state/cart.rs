//! # Cart State
//!
//! Owns the session's cart store.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Screens may hold clones of the state on different threads
//! 2. Only one mutation may touch the cart at a time
//! 3. Readers get owned snapshots, never a live reference
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Screen Action            Command                 Store Change          │
//! │  ─────────────            ───────                 ────────────          │
//! │                                                                         │
//! │  "Thêm" in modal ────────► add_to_cart() ───────► store.add(item)      │
//! │                                                                         │
//! │  "+" on menu row ────────► quick_add() ─────────► store.add(item)      │
//! │                                                                         │
//! │  Edit a row ─────────────► update_cart_item() ──► store.update(item)   │
//! │                                                                         │
//! │  Remove a row ───────────► remove_from_cart() ──► store.remove_named() │
//! │                                                                         │
//! │  "Hủy" / order placed ───► clear_cart() ────────► store.clear()        │
//! │                                                                         │
//! │  Listeners are called after the lock is released, on the thread       │
//! │  that made the change, with a snapshot of the resulting cart. They    │
//! │  may read the cart state from inside the callback.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use teacart_core::{Cart, CartEvent, CartStore, SubscriptionId};

type SharedListener = Arc<dyn Fn(&CartEvent, &Cart) + Send + Sync>;

/// A notification queued under the lock and delivered after it.
type Notification = (SharedListener, CartEvent, Cart);

/// Session-owned cart state.
///
/// Cloning is cheap and every clone points at the same cart.
#[derive(Clone, Default)]
pub struct CartState {
    store: Arc<Mutex<CartStore>>,
    pending: Arc<Mutex<Vec<Notification>>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use teacart_session::state::CartState;
    ///
    /// let cart_state = CartState::new();
    /// let empty = cart_state.with_cart(|cart| cart.is_empty());
    /// assert!(empty);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let store = self.lock();
        f(store.cart())
    }

    /// Executes a function with write access to the store.
    ///
    /// Listeners are notified once `f` has returned and the lock is released.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let result = {
            let mut store = self.lock();
            f(&mut store)
        };
        self.deliver_pending();
        result
    }

    /// Registers a listener called after every mutation.
    ///
    /// ## Usage
    /// ```rust
    /// use teacart_session::state::CartState;
    ///
    /// let cart_state = CartState::new();
    /// let reader = cart_state.clone();
    /// cart_state.subscribe(move |_event, cart| {
    ///     // reading the shared state from a listener is fine
    ///     assert_eq!(reader.with_cart(|c| c.len()), cart.len());
    /// });
    /// cart_state.with_store_mut(|store| store.clear());
    /// ```
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent, &Cart) + Send + Sync + 'static,
    {
        let listener: SharedListener = Arc::new(listener);
        let pending = Arc::clone(&self.pending);

        self.lock().subscribe(move |event, cart| {
            pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((Arc::clone(&listener), event.clone(), cart.clone()));
        })
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().unsubscribe(id)
    }

    fn deliver_pending(&self) {
        let batch = std::mem::take(
            &mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner),
        );

        for (listener, event, cart) in batch {
            listener(&event, &cart);
        }
    }

    // Store methods finish the mutation before queueing notifications, so a
    // poisoned lock still guards a consistent cart.
    fn lock(&self) -> MutexGuard<'_, CartStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for CartState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartState")
            .field("store", &*self.lock())
            .finish()
    }
}
