//! # Cart Commands
//!
//! Commands the order screens call to change or read the cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                     │
//! │  │  Empty   │────►│ NonEmpty │────►│   Checkout   │                     │
//! │  │  Cart    │     │          │     │   summary    │                     │
//! │  └──────────┘     └──────────┘     └──────────────┘                     │
//! │       ▲                │                  │                             │
//! │       │           add_to_cart       order submitted                     │
//! │       │           quick_add         (by the screen)                     │
//! │       │           update_cart_item        │                             │
//! │       │           remove_from_cart        │                             │
//! │       │                │                  ▼                             │
//! │       └────────────────┴───────────── clear_cart                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session never clears the cart on its own; whoever submits the order
//! calls [`clear_cart`] once submission succeeded.

use serde::Serialize;
use teacart_core::validation::validate_quantity;
use teacart_core::{
    Cart, CartPhase, CartTotals, CatalogItem, Configurator, CoreError, LineItem, Menu, Money,
};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::CartState;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
    pub phase: CartPhase,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
            phase: cart.phase(),
        }
    }
}

/// Snapshot handed to the order submission screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub items: Vec<LineItem>,
    pub total_quantity: i64,
    pub total: Money,
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Order screen footer (visible while the cart is non-empty)             │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  220.000đ                              [ Hủy ] [ Đặt hàng ]     │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                                                                         │
/// │  get_cart() → { items: [...], totals: {...}, phase: "non_empty" }      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Whether a drink is already in the cart (menu row highlight).
pub fn is_in_cart(cart: &CartState, name: &str) -> bool {
    cart.with_cart(|c| c.contains(name))
}

/// Adds the configured drink to the cart and resets the configurator.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Customer taps the price button at the bottom of the drink modal       │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Build LineItem (unit price frozen, quantity validated)     │    │
/// │  │  2. Append to cart, listeners notified                         │    │
/// │  │  3. Reset configurator to defaults                             │    │
/// │  │  4. Return updated cart                                        │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// On error the cart and the configurator are left untouched.
pub fn add_to_cart(
    cart: &CartState,
    configurator: &mut Configurator<'_>,
) -> Result<CartResponse, ApiError> {
    let item = configurator.take_line_item().map_err(|e| {
        warn!(drink = %configurator.item().name, error = %e, "add_to_cart rejected");
        ApiError::from(e)
    })?;

    debug!(
        drink = %item.name(),
        unit_price = %item.unit_price(),
        quantity = item.quantity(),
        "add_to_cart command"
    );

    Ok(cart.with_store_mut(|store| {
        store.add(item);
        CartResponse::from(store.cart())
    }))
}

/// Adds a drink with the default configuration ("+" on a menu row).
pub fn quick_add(
    cart: &CartState,
    drink: &CatalogItem,
    menu: &Menu,
) -> Result<CartResponse, ApiError> {
    debug!(drink = %drink.name, "quick_add command");
    let mut configurator = Configurator::new(drink, menu);
    add_to_cart(cart, &mut configurator)
}

/// Replaces every entry named like `item`.
///
/// Nothing happens if no entry has that name.
pub fn update_cart_item(cart: &CartState, item: LineItem) -> CartResponse {
    debug!(drink = %item.name(), quantity = item.quantity(), "update_cart_item command");

    cart.with_store_mut(|store| {
        let name = item.name().to_string();
        if store.update(item) == 0 {
            debug!(drink = %name, "update_cart_item: no entry with that name");
        }
        CartResponse::from(store.cart())
    })
}

/// Changes the quantity of the entries with this name.
///
/// The replacement copies the first matching entry, so every matching entry
/// ends up identical. Nothing happens if no entry has that name.
///
/// ## Errors
/// A validation error when `quantity` is outside `1..=999`, whether or not
/// the name is in the cart.
pub fn update_quantity(
    cart: &CartState,
    name: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(drink = %name, quantity = quantity, "update_quantity command");

    validate_quantity(quantity).map_err(|e| {
        warn!(drink = %name, quantity = quantity, error = %e, "update_quantity rejected");
        ApiError::from(CoreError::from(e))
    })?;

    cart.with_store_mut(|store| -> Result<CartResponse, ApiError> {
        let existing = store
            .cart()
            .items()
            .iter()
            .find(|entry| entry.name() == name)
            .cloned();

        if let Some(existing) = existing {
            let replacement = existing.with_quantity(quantity)?;
            store.update(replacement);
        }

        Ok(CartResponse::from(store.cart()))
    })
}

/// Removes every entry with this name.
pub fn remove_from_cart(cart: &CartState, name: &str) -> CartResponse {
    debug!(drink = %name, "remove_from_cart command");

    cart.with_store_mut(|store| {
        let removed = store.remove_named(name);
        debug!(drink = %name, removed, "remove_from_cart done");
        CartResponse::from(store.cart())
    })
}

/// Clears all items from the cart.
///
/// ## When Used
/// - Customer taps "Hủy" in the footer
/// - After the order was submitted successfully
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_store_mut(|store| {
        store.clear();
        CartResponse::from(store.cart())
    })
}

/// Reads what the order submission screen needs. Does not clear the cart.
///
/// ## Errors
/// A cart error when the cart is empty; the "Đặt hàng" button is disabled in
/// that state.
pub fn checkout_summary(cart: &CartState) -> Result<OrderSummary, ApiError> {
    debug!("checkout_summary command");

    cart.with_cart(|c| {
        if !c.can_checkout() {
            return Err(ApiError::from(CoreError::EmptyCart));
        }

        Ok(OrderSummary {
            items: c.items().to_vec(),
            total_quantity: c.total_quantity(),
            total: c.total(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use teacart_core::Size;

    fn milk_tea() -> CatalogItem {
        CatalogItem::new(
            "Trà sữa trân châu trắng - Truyền thống - Đá xay nhuyễn",
            Money::from_dong(25_000),
        )
    }

    fn green_tea() -> CatalogItem {
        CatalogItem::new("Trà xanh nóng - Uống phỏng lưỡi", Money::from_dong(2_000))
    }

    #[test]
    fn test_full_order_scenario() {
        let cart = CartState::new();
        let menu = Menu::default_drinks();
        let drink = milk_tea();

        for expected_total in [110_000, 220_000] {
            let mut config = Configurator::new(&drink, &menu);
            config.select_size(Size::Medium).unwrap();
            config.toggle_topping("1");
            config.toggle_topping("2");
            config.set_quantity(2).unwrap();

            let response = add_to_cart(&cart, &mut config).unwrap();
            assert_eq!(response.totals.total.dong(), expected_total);
            assert_eq!(config.quantity(), 1);
            assert!(config.toppings().is_empty());
        }

        let response = clear_cart(&cart);
        assert!(response.items.is_empty());
        assert!(response.totals.total.is_zero());
        assert_eq!(response.phase, CartPhase::Empty);
    }

    #[test]
    fn test_quick_add_uses_defaults() {
        let cart = CartState::new();
        let menu = Menu::default_drinks();

        let response = quick_add(&cart, &green_tea(), &menu).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].unit_price().dong(), 2_000);
        assert_eq!(response.items[0].quantity(), 1);
        assert!(response.items[0].note().is_empty());
        assert!(is_in_cart(&cart, &green_tea().name));
    }

    #[test]
    fn test_remove_and_update_key_on_name() {
        let cart = CartState::new();
        let menu = Menu::default_drinks();
        let drink = milk_tea();

        quick_add(&cart, &drink, &menu).unwrap();
        quick_add(&cart, &green_tea(), &menu).unwrap();
        quick_add(&cart, &drink, &menu).unwrap();

        let response = update_quantity(&cart, &drink.name, 3).unwrap();
        assert_eq!(response.totals.total.dong(), 25_000 * 3 * 2 + 2_000);

        let response = remove_from_cart(&cart, &drink.name);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name(), green_tea().name);
    }

    #[test]
    fn test_unknown_names_are_noops() {
        let cart = CartState::new();
        quick_add(&cart, &green_tea(), &Menu::default_drinks()).unwrap();
        let before = get_cart(&cart);

        assert_eq!(remove_from_cart(&cart, "missing"), before);
        assert_eq!(update_quantity(&cart, "missing", 4).unwrap(), before);

        let stranger = LineItem::new("missing", "", Money::from_dong(1_000), 1).unwrap();
        assert_eq!(update_cart_item(&cart, stranger), before);
    }

    #[test]
    fn test_update_quantity_rejects_zero() {
        let cart = CartState::new();
        let drink = green_tea();
        quick_add(&cart, &drink, &Menu::default_drinks()).unwrap();

        let err = update_quantity(&cart, &drink.name, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_cart(&cart).items[0].quantity(), 1);
    }

    #[test]
    fn test_update_quantity_rejects_zero_for_unknown_name() {
        let cart = CartState::new();
        quick_add(&cart, &green_tea(), &Menu::default_drinks()).unwrap();

        let err = update_quantity(&cart, "missing", 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = update_quantity(&cart, "missing", 1_000).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_cart(&cart).totals.total_quantity, 1);
    }

    #[test]
    fn test_add_to_cart_rejects_and_keeps_choices() {
        let cart = CartState::new();
        let menu = Menu::default_drinks();
        let nameless = CatalogItem::new("   ", Money::from_dong(10_000));

        let mut config = Configurator::new(&nameless, &menu);
        config.increment_quantity();

        let err = add_to_cart(&cart, &mut config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(config.quantity(), 2);
        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_checkout_summary() {
        let cart = CartState::new();
        let err = checkout_summary(&cart).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);

        let menu = Menu::default_drinks();
        quick_add(&cart, &milk_tea(), &menu).unwrap();
        quick_add(&cart, &green_tea(), &menu).unwrap();

        let summary = checkout_summary(&cart).unwrap();
        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.total_quantity, 2);
        assert_eq!(summary.total.dong(), 27_000);

        // reading the summary does not clear the cart
        assert_eq!(get_cart(&cart).items.len(), 2);
    }

    #[test]
    fn test_cart_response_json_shape() {
        let cart = CartState::new();
        quick_add(&cart, &green_tea(), &Menu::default_drinks()).unwrap();

        let json = serde_json::to_value(get_cart(&cart)).unwrap();
        assert_eq!(json["phase"], "non_empty");
        assert_eq!(json["totals"]["total"], 2000);
        assert_eq!(json["totals"]["can_checkout"], true);
        assert_eq!(json["items"][0]["unit_price"], 2000);
    }
}
