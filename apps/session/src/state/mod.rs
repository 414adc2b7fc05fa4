//! # State Module
//!
//! Session state, split by concern like the commands that use it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │                      OrderSession                                       │
//! │                           │                                             │
//! │          ┌────────────────┴────────────────┐                            │
//! │          ▼                                 ▼                            │
//! │  ┌──────────────────┐             ┌──────────────────┐                 │
//! │  │    CartState     │             │   ConfigState    │                 │
//! │  │                  │             │                  │                 │
//! │  │  Arc<Mutex<      │             │  store_name      │                 │
//! │  │    CartStore     │             │  currency        │                 │
//! │  │  >>              │             │  topping_cap     │                 │
//! │  └──────────────────┘             └──────────────────┘                 │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState: Protected by Arc<Mutex<T>>, one writer at a time         │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::CartState;
pub use config::{ConfigError, ConfigState};
