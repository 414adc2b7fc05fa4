//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The Vietnamese đồng has no subunit in practice, so menu prices are    │
//! │  whole numbers: 25.000đ, 10.000đ. We store exactly that number.        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use teacart_core::money::Money;
//!
//! let price = Money::from_dong(25_000);
//!
//! let doubled = price * 2;                          // 50.000đ
//! let with_topping = price + Money::from_dong(10_000); // 35.000đ
//!
//! assert_eq!(doubled.dong(), 50_000);
//! assert_eq!(with_topping.to_string(), "35.000đ");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole đồng.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative deltas should a menu ever discount a size
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Newtype serialization**: the UI sees a plain number
/// - **Saturating arithmetic**: results clamp at the `i64` bounds instead of
///   panicking or wrapping; validated prices never get near them
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  CatalogItem.base_price ─┐                                              │
/// │  SizeOption.price_delta ─┼──► unit price ──► LineItem ──► Cart.total   │
/// │  ToppingOption.price ────┘                                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from a whole number of đồng.
    ///
    /// ## Example
    /// ```rust
    /// use teacart_core::money::Money;
    ///
    /// let price = Money::from_dong(25_000);
    /// assert_eq!(price.dong(), 25_000);
    /// ```
    #[inline]
    pub const fn from_dong(dong: i64) -> Self {
        Money(dong)
    }

    /// Returns the value in đồng.
    #[inline]
    pub const fn dong(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use teacart_core::money::Money;
    ///
    /// let unit_price = Money::from_dong(55_000);
    /// assert_eq!(unit_price.multiply_quantity(2).dong(), 110_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Formats the amount with `.` thousands separators, without a symbol.
    ///
    /// This matches `toLocaleString("vi-VN")` on the mobile screens.
    ///
    /// ## Example
    /// ```rust
    /// use teacart_core::money::Money;
    ///
    /// assert_eq!(Money::from_dong(1_250_000).grouped(), "1.250.000");
    /// assert_eq!(Money::from_dong(-2_000).grouped(), "-2.000");
    /// assert_eq!(Money::from_dong(500).grouped(), "500");
    /// ```
    pub fn grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        if self.0 < 0 {
            out.push('-');
        }

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(ch);
        }

        out
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the menu does: `25.000đ`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}đ", self.grouped())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dong() {
        let money = Money::from_dong(25_000);
        assert_eq!(money.dong(), 25_000);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
        assert!(Money::default().is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_dong(25_000).to_string(), "25.000đ");
        assert_eq!(Money::from_dong(260_000).to_string(), "260.000đ");
        assert_eq!(Money::from_dong(1_000_000).to_string(), "1.000.000đ");
        assert_eq!(Money::from_dong(999).to_string(), "999đ");
        assert_eq!(Money::from_dong(0).to_string(), "0đ");
        assert_eq!(Money::from_dong(-10_000).to_string(), "-10.000đ");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_dong(25_000);
        let b = Money::from_dong(10_000);

        assert_eq!((a + b).dong(), 35_000);
        assert_eq!((a - b).dong(), 15_000);
        assert_eq!((a * 3).dong(), 75_000);

        let mut c = a;
        c += b;
        c -= Money::from_dong(5_000);
        assert_eq!(c.dong(), 30_000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_dong(i64::MAX);
        let min = Money::from_dong(i64::MIN);

        assert_eq!(max + Money::from_dong(1), max);
        assert_eq!(min - Money::from_dong(1), min);
        assert_eq!(Money::from_dong(i64::MAX / 2) * 3, max);
        assert_eq!(Money::from_dong(i64::MAX / 2).multiply_quantity(-3), min);

        let total: Money = vec![max, max, max].into_iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_sum() {
        let prices = vec![
            Money::from_dong(10_000),
            Money::from_dong(10_000),
            Money::from_dong(5_000),
        ];
        let by_ref: Money = prices.iter().sum();
        let by_value: Money = prices.into_iter().sum();
        assert_eq!(by_ref.dong(), 25_000);
        assert_eq!(by_value, by_ref);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_dong(25_000)).unwrap();
        assert_eq!(json, "25000");

        let back: Money = serde_json::from_str("15000").unwrap();
        assert_eq!(back, Money::from_dong(15_000));
    }
}
