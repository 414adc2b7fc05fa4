//! # Validation Module
//!
//! Input validation for everything that becomes part of a [`LineItem`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (React Native)                                        │
//! │  ├── Disabled "-" button at quantity 1                                 │
//! │  └── Disabled topping checkboxes at the cap                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (configurator / LineItem boundary)               │
//! │  ├── quantity in 1..=999                                               │
//! │  ├── price in 0..=MAX_UNIT_PRICE                                       │
//! │  └── name present, note bounded                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart store                                                   │
//! │  └── Trusts its input: a LineItem can only exist if it passed here     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`LineItem`]: crate::cart::LineItem

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MAX_NAME_LENGTH, MAX_NOTE_LENGTH, MAX_UNIT_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a drink name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
///
/// Length is counted in characters, not bytes: Vietnamese names carry a lot
/// of multi-byte diacritics.
///
/// ## Example
/// ```rust
/// use teacart_core::validation::validate_name;
///
/// assert!(validate_name("Trà xanh nóng").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates the free-form note.
///
/// ## Rules
/// - May be empty
/// - At most 200 characters
pub fn validate_note(note: &str) -> ValidationResult<()> {
    if note.chars().count() > MAX_NOTE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "note".to_string(),
            max: MAX_NOTE_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## Example
/// ```rust
/// use teacart_core::validation::validate_quantity;
///
/// assert!(validate_quantity(1).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(1000).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in đồng.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free drinks, promo items)
/// - Must not exceed MAX_UNIT_PRICE
///
/// ## Example
/// ```rust
/// use teacart_core::validation::validate_price;
/// use teacart_core::MAX_UNIT_PRICE;
///
/// assert!(validate_price(25_000).is_ok());
/// assert!(validate_price(MAX_UNIT_PRICE + 1).is_err());
/// ```
pub fn validate_price(dong: i64) -> ValidationResult<()> {
    if dong < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    if dong > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE,
        });
    }

    Ok(())
}

/// Validates a size surcharge in đồng.
///
/// ## Rules
/// - May be negative (a discounted size)
/// - Magnitude must not exceed MAX_UNIT_PRICE
pub fn validate_price_delta(dong: i64) -> ValidationResult<()> {
    if !(-MAX_UNIT_PRICE..=MAX_UNIT_PRICE).contains(&dong) {
        return Err(ValidationError::OutOfRange {
            field: "price_delta".to_string(),
            min: -MAX_UNIT_PRICE,
            max: MAX_UNIT_PRICE,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
