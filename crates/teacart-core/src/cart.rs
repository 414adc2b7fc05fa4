//! # Cart Module
//!
//! The ordered list of configured drinks and the totals derived from it.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            Operation             Effect on items         │
//! │  ─────────────            ─────────             ───────────────         │
//! │                                                                         │
//! │  "Thêm" in drink modal ──► add(item) ─────────► push to the end        │
//! │                                                                         │
//! │  Edit a row ─────────────► update(item) ──────► replace every entry    │
//! │                                                 with item.name         │
//! │                                                                         │
//! │  Swipe a row away ───────► remove(item) ──────► drop every entry       │
//! │                                                 with item.name         │
//! │                                                                         │
//! │  "Hủy" / order placed ───► clear() ───────────► items.clear()          │
//! │                                                                         │
//! │  Footer ─────────────────► total() ───────────► Σ quantity × unit      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Is the Drink Name
//! Two entries with the same name but different sizes or toppings are the
//! same entry as far as `remove` and `update` are concerned. Both of them go.

use serde::Serialize;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{validate_name, validate_note, validate_price, validate_quantity};

// =============================================================================
// Line Item
// =============================================================================

/// One configured drink in the cart.
///
/// ## Price Snapshot
/// `unit_price` already includes the size surcharge and every topping. The
/// breakdown is not kept, so a line item cannot be re-opened in the
/// configurator; it can only be replaced.
///
/// ## Invariants
/// - `quantity` is in `1..=MAX_ITEM_QUANTITY`
/// - `unit_price` is in `0..=MAX_UNIT_PRICE`
/// - `name` is not blank
///
/// Fields are private so that the only way to obtain a `LineItem` is through
/// [`LineItem::new`], which enforces the invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct LineItem {
    name: String,
    note: String,
    unit_price: Money,
    quantity: i64,
}

impl LineItem {
    /// Creates a validated line item.
    ///
    /// ## Example
    /// ```rust
    /// use teacart_core::{LineItem, Money};
    ///
    /// let item = LineItem::new("Trà xanh nóng", "", Money::from_dong(2_000), 3).unwrap();
    /// assert_eq!(item.line_total().dong(), 6_000);
    ///
    /// assert!(LineItem::new("Trà xanh nóng", "", Money::from_dong(2_000), 0).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        note: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> CoreResult<Self> {
        let name = name.into();
        let note = note.into();

        validate_name(&name)?;
        validate_note(&note)?;
        validate_price(unit_price.dong())?;
        validate_quantity(quantity)?;

        Ok(LineItem {
            name,
            note,
            unit_price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// unit price × quantity
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Copy of this item with another quantity.
    pub fn with_quantity(&self, quantity: i64) -> CoreResult<Self> {
        validate_quantity(quantity)?;
        Ok(LineItem {
            quantity,
            ..self.clone()
        })
    }

    /// Copy of this item with another note.
    pub fn with_note(&self, note: impl Into<String>) -> CoreResult<Self> {
        let note = note.into();
        validate_note(&note)?;
        Ok(LineItem {
            note,
            ..self.clone()
        })
    }
}

// =============================================================================
// Cart Phase
// =============================================================================

/// The two states of the cart that the screens care about.
///
/// ```text
///            add                    clear / last entry removed
///   Empty ─────────► NonEmpty ─────────────────────────────► Empty
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CartPhase {
    Empty,
    NonEmpty,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for one ordering session.
///
/// ## Invariants
/// - Entries keep insertion order
/// - Adding never merges entries, even with identical names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends an item to the end of the cart.
    pub fn add(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Removes every entry named like `item`.
    ///
    /// Returns how many entries were dropped; zero means nothing matched.
    pub fn remove(&mut self, item: &LineItem) -> usize {
        self.remove_named(&item.name)
    }

    /// Removes every entry with the given name.
    pub fn remove_named(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|entry| entry.name != name);
        before - self.items.len()
    }

    /// Replaces every entry named like `item` with a copy of `item`.
    ///
    /// Positions are kept. Returns how many entries were replaced; zero
    /// means nothing matched and the cart is unchanged.
    pub fn update(&mut self, item: LineItem) -> usize {
        let mut replaced = 0;
        for entry in self.items.iter_mut().filter(|entry| entry.name == item.name) {
            *entry = item.clone();
            replaced += 1;
        }
        replaced
    }

    /// Empties the cart. Returns how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.items.len();
        self.items.clear();
        dropped
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of entries (not cups).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a drink with this name is in the cart.
    ///
    /// The menu list highlights rows for which this is true.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|entry| entry.name == name)
    }

    /// Total number of cups across all entries.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|entry| entry.quantity).sum()
    }

    /// Σ quantity × unit price.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    pub fn phase(&self) -> CartPhase {
        if self.items.is_empty() {
            CartPhase::Empty
        } else {
            CartPhase::NonEmpty
        }
    }

    /// The "Đặt hàng" button is enabled iff this is true.
    pub fn can_checkout(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

/// Cart totals summary for the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
    pub can_checkout: bool,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
            can_checkout: cart.can_checkout(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_ITEM_QUANTITY, MAX_UNIT_PRICE};

    fn item(name: &str, unit: i64, qty: i64) -> LineItem {
        LineItem::new(name, "", Money::from_dong(unit), qty).unwrap()
    }

    #[test]
    fn test_line_item_rejects_bad_input() {
        assert!(LineItem::new("Trà", "", Money::from_dong(10_000), 0).is_err());
        assert!(LineItem::new("Trà", "", Money::from_dong(-1), 1).is_err());
        assert!(LineItem::new("  ", "", Money::from_dong(10_000), 1).is_err());
        assert!(LineItem::new("Trà", "x".repeat(201), Money::from_dong(10_000), 1).is_err());
    }

    #[test]
    fn test_line_item_rejects_price_that_would_overflow_totals() {
        assert!(LineItem::new("A", "", Money::from_dong(i64::MAX / 2), 3).is_err());
        assert!(LineItem::new("A", "", Money::from_dong(MAX_UNIT_PRICE + 1), 1).is_err());
    }

    #[test]
    fn test_largest_valid_lines_total_exactly() {
        let mut cart = Cart::new();
        for _ in 0..1_000 {
            cart.add(item("A", MAX_UNIT_PRICE, MAX_ITEM_QUANTITY));
        }

        let expected = MAX_UNIT_PRICE * MAX_ITEM_QUANTITY * 1_000;
        assert_eq!(cart.total().dong(), expected);
        assert_eq!(cart.total_quantity(), MAX_ITEM_QUANTITY * 1_000);
    }

    #[test]
    fn test_line_item_with_quantity() {
        let original = item("Trà", 10_000, 1);
        let bumped = original.with_quantity(4).unwrap();
        assert_eq!(bumped.quantity(), 4);
        assert_eq!(bumped.line_total().dong(), 40_000);
        assert!(original.with_quantity(0).is_err());

        let noted = original.with_note("Ít đá").unwrap();
        assert_eq!(noted.note(), "Ít đá");
        assert_eq!(noted.unit_price(), original.unit_price());
    }

    #[test]
    fn test_add_keeps_order_and_never_merges() {
        let mut cart = Cart::new();
        cart.add(item("A", 10_000, 1));
        cart.add(item("B", 20_000, 1));
        cart.add(item("A", 10_000, 1));

        let names: Vec<&str> = cart.items().iter().map(LineItem::name).collect();
        assert_eq!(names, vec!["A", "B", "A"]);
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_total_is_quantity_times_unit() {
        let mut cart = Cart::new();
        cart.add(item("A", 55_000, 2));
        cart.add(item("B", 2_000, 3));

        assert_eq!(cart.total().dong(), 116_000);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_add_then_remove_restores_prior_state() {
        let mut cart = Cart::new();
        cart.add(item("A", 10_000, 1));
        let before = cart.clone();
        let before_total = cart.total();

        let extra = item("B", 30_000, 2);
        cart.add(extra.clone());
        assert_eq!(cart.remove(&extra), 1);

        assert_eq!(cart, before);
        assert_eq!(cart.total(), before_total);
    }

    #[test]
    fn test_remove_drops_every_entry_with_that_name() {
        let mut cart = Cart::new();
        cart.add(item("A", 25_000, 1));
        cart.add(item("B", 15_000, 1));
        cart.add(item("A", 45_000, 2));

        assert_eq!(cart.remove_named("A"), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name(), "B");
    }

    #[test]
    fn test_remove_missing_name_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("A", 25_000, 1));
        assert_eq!(cart.remove_named("Z"), 0);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_replaces_every_entry_in_place() {
        let mut cart = Cart::new();
        cart.add(item("A", 25_000, 1));
        cart.add(item("B", 15_000, 1));
        cart.add(item("A", 45_000, 2));

        let replacement = item("A", 30_000, 3);
        assert_eq!(cart.update(replacement.clone()), 2);

        assert_eq!(cart.items()[0], replacement);
        assert_eq!(cart.items()[1].name(), "B");
        assert_eq!(cart.items()[2], replacement);
        assert_eq!(cart.total().dong(), 30_000 * 3 * 2 + 15_000);
    }

    #[test]
    fn test_update_missing_name_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("A", 25_000, 1));
        let before = cart.clone();

        assert_eq!(cart.update(item("Z", 1_000, 1)), 0);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_always_empties() {
        let mut cart = Cart::new();
        assert_eq!(cart.clear(), 0);

        cart.add(item("A", 25_000, 1));
        cart.add(item("B", 15_000, 4));
        assert_eq!(cart.clear(), 2);

        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert_eq!(cart.phase(), CartPhase::Empty);
    }

    #[test]
    fn test_phase_and_checkout() {
        let mut cart = Cart::new();
        assert_eq!(cart.phase(), CartPhase::Empty);
        assert!(!cart.can_checkout());

        cart.add(item("A", 25_000, 1));
        assert_eq!(cart.phase(), CartPhase::NonEmpty);
        assert!(cart.can_checkout());
        assert!(cart.contains("A"));
        assert!(!cart.contains("B"));

        cart.remove_named("A");
        assert_eq!(cart.phase(), CartPhase::Empty);
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add(item("A", 55_000, 2));

        let totals = cart.totals();
        assert_eq!(totals.item_count, 1);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.total.dong(), 110_000);
        assert!(totals.can_checkout);
    }

    #[test]
    fn test_line_item_json_shape() {
        let json = serde_json::to_value(item("A", 55_000, 2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "A",
                "note": "",
                "unit_price": 55000,
                "quantity": 2
            })
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::{MAX_ITEM_QUANTITY, MAX_UNIT_PRICE};
    use proptest::prelude::*;

    fn line_item(names: &'static str) -> impl Strategy<Value = LineItem> {
        (names, 0..=MAX_UNIT_PRICE, 1..=MAX_ITEM_QUANTITY).prop_map(|(name, unit, quantity)| {
            LineItem::new(name, "", Money::from_dong(unit), quantity).unwrap()
        })
    }

    fn cart() -> impl Strategy<Value = Cart> {
        proptest::collection::vec(line_item("[A-E]"), 0..20).prop_map(|items| {
            let mut cart = Cart::new();
            for item in items {
                cart.add(item);
            }
            cart
        })
    }

    proptest! {
        #[test]
        fn test_total_is_sum_of_quantity_times_unit(cart in cart()) {
            let expected: i64 = cart
                .items()
                .iter()
                .map(|item| item.quantity() * item.unit_price().dong())
                .sum();

            prop_assert_eq!(cart.total().dong(), expected);
            prop_assert_eq!(cart.can_checkout(), !cart.is_empty());
        }

        #[test]
        fn test_add_then_remove_restores_cart(cart in cart(), extra in line_item("[F-J]")) {
            let mut after = cart.clone();
            after.add(extra.clone());
            prop_assert_eq!(after.total(), cart.total() + extra.line_total());

            prop_assert_eq!(after.remove(&extra), 1);
            prop_assert_eq!(after.total(), cart.total());
            prop_assert_eq!(after, cart);
        }

        #[test]
        fn test_clear_always_empties(mut cart in cart()) {
            let len = cart.len();

            prop_assert_eq!(cart.clear(), len);
            prop_assert!(cart.is_empty());
            prop_assert!(cart.total().is_zero());
            prop_assert_eq!(cart.phase(), CartPhase::Empty);
        }

        #[test]
        fn test_update_touches_only_that_name(cart in cart(), replacement in line_item("[A-E]")) {
            let mut after = cart.clone();
            let matching = cart.items().iter().filter(|item| item.name() == replacement.name()).count();

            prop_assert_eq!(after.update(replacement.clone()), matching);
            prop_assert_eq!(after.len(), cart.len());
            for (old, new) in cart.items().iter().zip(after.items()) {
                if old.name() == replacement.name() {
                    prop_assert_eq!(new, &replacement);
                } else {
                    prop_assert_eq!(new, old);
                }
            }
        }
    }
}
