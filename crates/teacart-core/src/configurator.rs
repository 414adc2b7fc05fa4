//! # Configurator Module
//!
//! Turns a catalog item plus the customer's choices in the drink modal into a
//! priced [`LineItem`].
//!
//! ## Drink Modal Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tap a drink                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Configurator::new(item, menu)   size = smallest, qty = 1, no toppings │
//! │       │                                                                 │
//! │       ├── select_size(Medium)        radio: replaces previous size     │
//! │       ├── toggle_topping("1")        checkbox: add / remove            │
//! │       ├── toggle_topping("3")        ignored once the cap is reached   │
//! │       ├── increment_quantity()       "+" / "-" stepper, floor of 1     │
//! │       ├── set_note("Ít đá")                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  line_total()  ──► shown on the "add" button                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  take_line_item() ──► LineItem for the cart, configurator reset         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing
//! ```text
//! unit price  = base price + size delta + Σ topping prices
//! line total  = unit price × quantity
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::cart::LineItem;
use crate::catalog::Menu;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CatalogItem, Size};
use crate::validation::{validate_note, validate_price, validate_quantity};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Pricing
// =============================================================================

/// Price of one configured cup.
///
/// Order of `topping_prices` does not matter.
///
/// ## Example
/// ```rust
/// use teacart_core::{compute_unit_price, Money};
///
/// let unit = compute_unit_price(
///     Money::from_dong(25_000),
///     Money::from_dong(10_000),
///     [Money::from_dong(10_000), Money::from_dong(10_000)],
/// );
/// assert_eq!(unit.dong(), 55_000);
/// ```
pub fn compute_unit_price<I>(base_price: Money, size_delta: Money, topping_prices: I) -> Money
where
    I: IntoIterator<Item = Money>,
{
    base_price + size_delta + topping_prices.into_iter().sum::<Money>()
}

/// Price of `quantity` cups.
///
/// ## Errors
/// [`ValidationError::MustBePositive`] when `quantity < 1`.
pub fn compute_line_total(unit_price: Money, quantity: i64) -> CoreResult<Money> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into());
    }

    Ok(unit_price.multiply_quantity(quantity))
}

// =============================================================================
// Topping Selection
// =============================================================================

/// What happened when a topping was toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The topping was not selected and now is.
    Added,
    /// The topping was selected and no longer is.
    Removed,
    /// The cap was already reached; nothing changed.
    CapReached,
    /// The menu has no topping with that id; nothing changed.
    Unknown,
}

impl ToggleOutcome {
    /// Whether the selection changed.
    pub fn changed(&self) -> bool {
        matches!(self, ToggleOutcome::Added | ToggleOutcome::Removed)
    }
}

/// The set of selected topping ids, bounded by a cap.
///
/// Ids are kept sorted, so the same set of toppings always compares equal
/// no matter the order it was picked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ToppingSelection {
    selected: Vec<String>,
    cap: usize,
}

impl ToppingSelection {
    pub fn new(cap: usize) -> Self {
        ToppingSelection {
            selected: Vec::new(),
            cap,
        }
    }

    /// Toggles a topping.
    ///
    /// A selected topping is always removed. An unselected topping is added
    /// only while fewer than `cap` toppings are selected; otherwise the call
    /// is a no-op reported as [`ToggleOutcome::CapReached`].
    ///
    /// ## Example
    /// ```rust
    /// use teacart_core::{ToggleOutcome, ToppingSelection};
    ///
    /// let mut toppings = ToppingSelection::new(2);
    /// assert_eq!(toppings.toggle("1"), ToggleOutcome::Added);
    /// assert_eq!(toppings.toggle("2"), ToggleOutcome::Added);
    /// assert_eq!(toppings.toggle("3"), ToggleOutcome::CapReached);
    /// assert_eq!(toppings.toggle("1"), ToggleOutcome::Removed);
    /// assert_eq!(toppings.selected(), ["2"]);
    /// ```
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        match self.position(id) {
            Ok(pos) => {
                self.selected.remove(pos);
                ToggleOutcome::Removed
            }
            Err(_) if self.selected.len() >= self.cap => ToggleOutcome::CapReached,
            Err(pos) => {
                self.selected.insert(pos, id.to_string());
                ToggleOutcome::Added
            }
        }
    }

    /// Whether the checkbox for `id` should be enabled.
    pub fn can_select(&self, id: &str) -> bool {
        self.contains(id) || self.selected.len() < self.cap
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_ok()
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    fn position(&self, id: &str) -> Result<usize, usize> {
        self.selected.binary_search_by(|selected| selected.as_str().cmp(id))
    }
}

// =============================================================================
// Configurator
// =============================================================================

/// One drink-modal session.
///
/// Borrows the drink and the menu it is priced against; owns only the
/// customer's choices.
#[derive(Debug, Clone)]
pub struct Configurator<'a> {
    item: &'a CatalogItem,
    menu: &'a Menu,
    size: Size,
    toppings: ToppingSelection,
    quantity: i64,
    note: String,
}

impl<'a> Configurator<'a> {
    /// Opens a configurator with the default choices.
    pub fn new(item: &'a CatalogItem, menu: &'a Menu) -> Self {
        Configurator {
            item,
            menu,
            size: menu.default_size(),
            toppings: ToppingSelection::new(menu.topping_cap()),
            quantity: 1,
            note: String::new(),
        }
    }

    pub fn item(&self) -> &CatalogItem {
        self.item
    }

    pub fn menu(&self) -> &Menu {
        self.menu
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn toppings(&self) -> &ToppingSelection {
        &self.toppings
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Selects a size, replacing the previous one.
    ///
    /// ## Errors
    /// [`CoreError::SizeNotOffered`] if the menu does not list `size`; the
    /// previous selection is kept.
    pub fn select_size(&mut self, size: Size) -> CoreResult<()> {
        if self.menu.size(size).is_none() {
            return Err(CoreError::SizeNotOffered(size));
        }
        self.size = size;
        Ok(())
    }

    /// Toggles a topping by id. See [`ToppingSelection::toggle`].
    pub fn toggle_topping(&mut self, id: &str) -> ToggleOutcome {
        if self.menu.topping(id).is_none() {
            return ToggleOutcome::Unknown;
        }
        self.toppings.toggle(id)
    }

    /// Whether the checkbox for topping `id` should be enabled.
    pub fn can_select_topping(&self, id: &str) -> bool {
        self.menu.topping(id).is_some() && self.toppings.can_select(id)
    }

    /// "+" button. Stops at the maximum item quantity.
    pub fn increment_quantity(&mut self) {
        self.quantity = (self.quantity + 1).min(MAX_ITEM_QUANTITY);
    }

    /// "-" button. Never goes below 1.
    pub fn decrement_quantity(&mut self) {
        self.quantity = (self.quantity - 1).max(1);
    }

    /// Sets the quantity directly.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    pub fn set_note(&mut self, note: impl Into<String>) -> CoreResult<()> {
        let note = note.into();
        validate_note(&note)?;
        self.note = note;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Surcharge of the selected size.
    pub fn size_delta(&self) -> Money {
        self.menu
            .size(self.size)
            .map(|option| option.price_delta)
            .unwrap_or_default()
    }

    /// Price of one cup with the current choices.
    pub fn unit_price(&self) -> Money {
        let topping_prices = self
            .toppings
            .selected()
            .iter()
            .filter_map(|id| self.menu.topping(id))
            .map(|topping| topping.price);

        compute_unit_price(self.item.base_price, self.size_delta(), topping_prices)
    }

    /// Price shown on the "add to cart" button.
    pub fn line_total(&self) -> Money {
        // quantity is kept >= 1 by every setter
        self.unit_price().multiply_quantity(self.quantity)
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Builds the line item for the current choices without resetting.
    ///
    /// ## Errors
    /// [`CoreError::Validation`] when the drink's base price or the resulting
    /// unit price is out of range, or the drink has no name.
    pub fn build_line_item(&self) -> CoreResult<LineItem> {
        validate_price(self.item.base_price.dong())?;

        LineItem::new(
            self.item.name.clone(),
            self.note.clone(),
            self.unit_price(),
            self.quantity,
        )
    }

    /// Back to defaults: quantity 1, empty note, no toppings, smallest size.
    pub fn reset(&mut self) {
        self.size = self.menu.default_size();
        self.toppings.clear();
        self.quantity = 1;
        self.note.clear();
    }

    /// Builds the line item and resets, as the "add to cart" button does.
    ///
    /// On error nothing is reset, so the customer keeps their choices.
    pub fn take_line_item(&mut self) -> CoreResult<LineItem> {
        let item = self.build_line_item()?;
        self.reset();
        Ok(item)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
