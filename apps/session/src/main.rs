//! # TeaCart Session Entry Point
//!
//! Runs one scripted ordering session against the default menu and prints
//! every command response as JSON, the same payloads the screens receive.
//!
//! ## Script
//! 1. Configure a medium milk tea with two toppings, quantity 2, and add it
//! 2. Add the same drink again
//! 3. Quick-add a peach tea
//! 4. Change a quantity, remove a drink, print the checkout summary
//! 5. Clear the cart and end the session

use std::process::ExitCode;

use serde::Serialize;
use teacart_core::{CatalogItem, Configurator, Money, Size};
use teacart_session::commands::{cart, config};
use teacart_session::error::ApiError;
use teacart_session::{init_tracing, OrderSession};
use tracing::{error, info};

fn main() -> ExitCode {
    init_tracing();

    let session = match OrderSession::from_env() {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "Failed to start order session");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&session) {
        error!(error = %e, "Scripted order failed");
        return ExitCode::FAILURE;
    }

    let totals = session.end();
    info!(items = totals.item_count, "Done");
    ExitCode::SUCCESS
}

fn run(session: &OrderSession) -> Result<(), ApiError> {
    let state = session.cart();
    let menu = config::get_menu(session.config());
    print_json("menu", &menu)?;

    let _subscription = state.subscribe(|event, cart| {
        info!(?event, items = cart.len(), total = %cart.total(), "Cart changed");
    });

    let milk_tea = CatalogItem::new("Trà Sữa Trân Châu", Money::from_dong(25_000))
        .with_description("Trà sữa truyền thống");
    let peach_tea = CatalogItem::new("Trà Đào", Money::from_dong(30_000));

    let mut configurator = Configurator::new(&milk_tea, &menu);
    configurator.select_size(Size::Medium)?;
    configurator.toggle_topping("1");
    configurator.toggle_topping("2");
    configurator.increment_quantity();
    configurator.set_note("ít đá")?;
    info!(
        unit_price = %configurator.unit_price(),
        line_total = %configurator.line_total(),
        "Drink configured"
    );

    print_json("add_to_cart", &cart::add_to_cart(state, &mut configurator)?)?;

    configurator.select_size(Size::Medium)?;
    configurator.toggle_topping("1");
    configurator.toggle_topping("2");
    configurator.increment_quantity();
    print_json("add_to_cart", &cart::add_to_cart(state, &mut configurator)?)?;

    print_json("quick_add", &cart::quick_add(state, &peach_tea, &menu)?)?;
    print_json(
        "update_quantity",
        &cart::update_quantity(state, &peach_tea.name, 3)?,
    )?;
    print_json("remove_from_cart", &cart::remove_from_cart(state, &peach_tea.name))?;

    let summary = cart::checkout_summary(state)?;
    info!(
        total = %session.config().format_currency(summary.total),
        "Ready to submit"
    );
    print_json("checkout_summary", &summary)?;

    print_json("clear_cart", &cart::clear_cart(state))?;
    Ok(())
}

fn print_json<T: Serialize>(label: &str, value: &T) -> Result<(), ApiError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("── {label} ──\n{json}");
    Ok(())
}
