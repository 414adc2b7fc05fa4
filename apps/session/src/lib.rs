//! # TeaCart Order Session
//!
//! Owns the cart and configuration of one ordering session and exposes the
//! commands the order screens call.
//!
//! ## Module Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        teacart-session                                  │
//! │                                                                         │
//! │  lib.rs ─────► OrderSession, tracing setup                              │
//! │                                                                         │
//! │  commands/ ──► get_cart, add_to_cart, update_quantity, get_menu, ...    │
//! │                                                                         │
//! │  state/ ─────► CartState (shared CartStore), ConfigState                │
//! │                                                                         │
//! │  error.rs ───► ApiError returned from every fallible command            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session Lifecycle
//! 1. Initialize tracing
//! 2. Load configuration (`TEACART_*` over defaults)
//! 3. Create an empty cart
//! 4. Screens call commands against the session state
//! 5. `end()` logs the final totals and drops the cart

pub mod commands;
pub mod error;
pub mod state;

use chrono::{DateTime, Utc};
use teacart_core::{CartTotals, Menu};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use error::ApiError;
use state::{CartState, ConfigState};

/// One ordering session: a cart plus the configuration it was opened with.
///
/// The session is the single owner of the cart store. Screens that need
/// the cart receive a clone of [`CartState`], which shares the same store.
#[derive(Debug)]
pub struct OrderSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    cart: CartState,
    config: ConfigState,
}

impl OrderSession {
    /// Opens a session with an empty cart.
    pub fn new(config: ConfigState) -> Self {
        let session = OrderSession {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            cart: CartState::new(),
            config,
        };

        info!(
            session_id = %session.id,
            store = %session.config.store_name,
            topping_cap = session.config.topping_cap,
            "Order session started"
        );

        session
    }

    /// Opens a session configured from the environment.
    pub fn from_env() -> Result<Self, ApiError> {
        let config = ConfigState::from_env()?;
        Ok(OrderSession::new(config))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Shared handle to the session cart.
    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Menu offered in this session.
    pub fn menu(&self) -> Menu {
        self.config.menu()
    }

    /// Ends the session and returns the totals the cart held at the end.
    pub fn end(self) -> CartTotals {
        let totals = self.cart.with_cart(|c| CartTotals::from(c));
        let elapsed = Utc::now() - self.started_at;

        info!(
            session_id = %self.id,
            items = totals.item_count,
            total = %self.config.format_currency(totals.total),
            elapsed_ms = elapsed.num_milliseconds(),
            "Order session ended"
        );

        totals
    }
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show all debug messages
/// - `RUST_LOG=teacart=trace` - Show trace for teacart crates only
/// - Default: INFO, DEBUG for teacart crates
///
/// Calling this twice is harmless; the second call keeps the first subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,teacart=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
