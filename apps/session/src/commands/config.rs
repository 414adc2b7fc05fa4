//! # Config Commands
//!
//! Commands for reading session configuration and the menu.

use teacart_core::Menu;
use tracing::debug;

use crate::state::ConfigState;

/// Gets the current session configuration.
///
/// ## When Used
/// - Order screen header (store name)
/// - Currency formatting
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Gets the drink menu (sizes, toppings, topping cap) for the drink modal.
pub fn get_menu(config: &ConfigState) -> Menu {
    debug!(topping_cap = config.topping_cap, "get_menu command");
    config.menu()
}
