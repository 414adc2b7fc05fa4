//! # Error Types
//!
//! Domain-specific error types for teacart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  teacart-core errors (this file)                                       │
//! │  ├── CoreError        - Configurator / menu rule violations            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  teacart-session errors (app)                                          │
//! │  └── ApiError         - What the screens see (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Screen                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! - Ticking a third topping when two are selected: a no-op outcome
//! - Removing or updating a name that is not in the cart: a zero count

use thiserror::Error;

use crate::types::Size;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent contract violations at the configurator boundary. They
/// never originate inside the cart store.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested size is not offered by the menu.
    ///
    /// ## When This Occurs
    /// - A screen passes `Large` while the menu only lists small and medium
    #[error("Size {0:?} is not offered on this menu")]
    SizeNotOffered(Size),

    /// The menu has no size options at all, so no default can be chosen.
    #[error("Menu has no size options")]
    NoSizes,

    /// Checkout was requested on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::SizeNotOffered(Size::Large);
        assert_eq!(err.to_string(), "Size Large is not offered on this menu");
        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::TooLong {
            field: "note".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "note must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
