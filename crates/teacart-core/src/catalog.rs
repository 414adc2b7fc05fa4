//! # Catalog Module
//!
//! The drink menu the configurator prices against: which sizes exist and what
//! they cost, which toppings exist, and how many toppings one drink may take.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu::default_drinks()                                                 │
//! │                                                                         │
//! │  Size *  (Chọn 1 loại size)          Topping  (Chọn tối đa 2 loại)      │
//! │  ( ) Vừa  +10.000đ                   [ ] Trái Vải         10.000đ      │
//! │  (•) Nhỏ       +0đ                   [ ] Hạt Sen          10.000đ      │
//! │                                      [ ] Thạch Cà Phê     10.000đ      │
//! │                                      [ ] Trân châu trắng  10.000đ      │
//! │                                      [ ] Đào Miếng        10.000đ      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Size, SizeOption, ToppingOption};
use crate::validation::{validate_price, validate_price_delta};
use crate::DEFAULT_TOPPING_CAP;

/// Sizes, toppings and the topping cap of a menu.
///
/// ## Invariants
/// - At least one size is offered
/// - Sizes are sorted smallest first and unique per [`Size`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    sizes: Vec<SizeOption>,
    toppings: Vec<ToppingOption>,
    topping_cap: usize,
}

impl Menu {
    /// Builds a menu from its size table and topping catalog.
    ///
    /// If two options share a [`Size`], the first one wins.
    ///
    /// ## Errors
    /// - [`CoreError::NoSizes`] when `sizes` is empty
    /// - [`CoreError::Validation`] when a surcharge or topping price is out
    ///   of range
    pub fn new(
        sizes: Vec<SizeOption>,
        toppings: Vec<ToppingOption>,
        topping_cap: usize,
    ) -> CoreResult<Self> {
        if sizes.is_empty() {
            return Err(CoreError::NoSizes);
        }

        for option in &sizes {
            validate_price_delta(option.price_delta.dong())?;
        }
        for topping in &toppings {
            validate_price(topping.price.dong())?;
        }

        let mut sizes = sizes;
        // stable sort keeps the first of any duplicate in front
        sizes.sort_by_key(|option| option.size);
        sizes.dedup_by_key(|option| option.size);

        Ok(Menu {
            sizes,
            toppings,
            topping_cap,
        })
    }

    /// The menu every drink in the app currently uses.
    pub fn default_drinks() -> Self {
        let topping = |id: &str, name: &str| ToppingOption::new(id, name, Money::from_dong(10_000));

        Menu {
            sizes: vec![
                SizeOption::new(Size::Small, "Nhỏ", Money::zero()),
                SizeOption::new(Size::Medium, "Vừa", Money::from_dong(10_000)),
            ],
            toppings: vec![
                topping("1", "Trái Vải"),
                topping("2", "Hạt Sen"),
                topping("3", "Thạch Cà Phê"),
                topping("4", "Trân châu trắng"),
                topping("5", "Đào Miếng"),
            ],
            topping_cap: DEFAULT_TOPPING_CAP,
        }
    }

    /// Returns the same menu with a different topping cap.
    pub fn with_topping_cap(mut self, topping_cap: usize) -> Self {
        self.topping_cap = topping_cap;
        self
    }

    pub fn sizes(&self) -> &[SizeOption] {
        &self.sizes
    }

    pub fn toppings(&self) -> &[ToppingOption] {
        &self.toppings
    }

    pub fn topping_cap(&self) -> usize {
        self.topping_cap
    }

    /// The smallest size on offer; what a fresh configurator starts with.
    pub fn default_size(&self) -> Size {
        self.sizes[0].size
    }

    /// Looks up a size option.
    pub fn size(&self, size: Size) -> Option<&SizeOption> {
        self.sizes.iter().find(|option| option.size == size)
    }

    /// Looks up a topping by id.
    pub fn topping(&self, id: &str) -> Option<&ToppingOption> {
        self.toppings.iter().find(|topping| topping.id == id)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Menu::default_drinks()
    }
}
