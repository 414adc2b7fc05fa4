//! # Commands Module
//!
//! Everything the order screens may call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Cart manipulation, checkout summary
//! └── config.rs   ◄─── Configuration and menu retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // Only needs the configuration
//! fn get_menu(config: &ConfigState) -> Menu
//! ```
//!
//! Responses are plain serde types; the screens receive them as JSON.

pub mod cart;
pub mod config;
