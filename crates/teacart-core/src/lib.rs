//! # teacart-core: Pure Ordering Logic for TeaCart
//!
//! This crate holds the only real business logic of the TeaCart mobile app:
//! pricing a configured drink and keeping the cart. Everything here is a
//! pure function or an in-memory mutation with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TeaCart Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile Screens (React Native)                   │   │
//! │  │    Menu list ──► Drink modal ──► Cart footer ──► Checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              teacart-session (OrderSession, CartState)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ teacart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌───────────┐  ┌─────────┐  │   │
//! │  │   │  catalog  │  │ configurator │  │   cart    │  │  store  │  │   │
//! │  │   │   Menu    │  │ size/topping │  │ LineItem  │  │ notify  │  │   │
//! │  │   └───────────┘  └──────────────┘  └───────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO LOGGING • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type in whole đồng (no floating point!)
//! - [`types`] - Catalog snapshot types (CatalogItem, SizeOption, ToppingOption)
//! - [`catalog`] - The drink menu: size table, topping catalog, topping cap
//! - [`configurator`] - Turns a selection into a priced [`LineItem`]
//! - [`cart`] - The ordered list of line items and its totals
//! - [`store`] - Cart plus synchronous change notification
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use teacart_core::{CartStore, CatalogItem, Configurator, Menu, Money, Size};
//!
//! let menu = Menu::default_drinks();
//! let drink = CatalogItem::new("Trà sữa trân châu", Money::from_dong(25_000));
//!
//! let mut config = Configurator::new(&drink, &menu);
//! config.select_size(Size::Medium).unwrap();
//! config.toggle_topping("1");
//! config.toggle_topping("2");
//! config.increment_quantity();
//!
//! assert_eq!(config.unit_price().dong(), 55_000);
//! assert_eq!(config.line_total().dong(), 110_000);
//!
//! let mut store = CartStore::new();
//! store.add(config.take_line_item().unwrap());
//! assert_eq!(store.cart().total().dong(), 110_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod configurator;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartPhase, CartTotals, LineItem};
pub use catalog::Menu;
pub use configurator::{compute_line_total, compute_unit_price, Configurator, ToggleOutcome, ToppingSelection};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{CartEvent, CartStore, SubscriptionId};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of toppings on one drink.
///
/// The menu screen tells the customer "Chọn tối đa 2 loại" and disables the
/// remaining checkboxes once two are ticked.
pub const DEFAULT_TOPPING_CAP: usize = 2;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// The quantity stepper has no upper bound on screen; this stops an
/// accidental long-press from producing an absurd order.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum price of one cup, in đồng.
///
/// With at most [`MAX_ITEM_QUANTITY`] cups per line, any line total stays
/// far inside `i64`.
pub const MAX_UNIT_PRICE: i64 = 100_000_000;

/// Maximum length of the free-form note ("Yêu cầu khác"), in characters.
pub const MAX_NOTE_LENGTH: usize = 200;

/// Maximum length of a drink name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;
