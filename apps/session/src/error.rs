//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in TeaCart                                │
//! │                                                                         │
//! │  Screen                      Session                                    │
//! │  ──────                      ───────                                    │
//! │                                                                         │
//! │  add_to_cart(...)                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── CoreError::Validation ──┐                 │  │
//! │  │         │                                      ▼                 │  │
//! │  │  Empty cart?  ──────── CoreError::EmptyCart ── ApiError ────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rejected topping toggles and removals of names that are not in the cart
//! are not errors and never reach this type.

use serde::Serialize;
use teacart_core::CoreError;

use crate::state::ConfigError;

/// API error returned from session commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "quantity must be positive"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Selection does not exist on the menu
    NotOnMenu,

    /// Cart operation not allowed in the current cart state
    CartError,

    /// Session could not be configured
    ConfigError,

    /// Failure that is not the caller's fault
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SizeNotOffered(_) | CoreError::NoSizes => {
                ApiError::new(ErrorCode::NotOnMenu, err.to_string())
            }
            CoreError::EmptyCart => ApiError::cart("Cart is empty"),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

/// A response that cannot be encoded is a bug, not bad input.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Response serialization failed: {}", err);
        ApiError::internal(format!("Serialization failed: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use teacart_core::{Size, ValidationError};

    #[test]
    fn test_from_core_error() {
        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");

        let err: ApiError = CoreError::SizeNotOffered(Size::Large).into();
        assert_eq!(err.code, ErrorCode::NotOnMenu);

        let err: ApiError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::cart("Cart is empty")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "CART_ERROR", "message": "Cart is empty" })
        );
    }

    #[test]
    fn test_from_serde_json_error_is_internal() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = json_err.into();
        assert_eq!(err.code, ErrorCode::Internal);
        assert!(err.message.starts_with("Serialization failed"));

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INTERNAL");
    }

    #[test]
    fn test_display() {
        let err = ApiError::validation("note must be at most 200 characters");
        assert_eq!(
            err.to_string(),
            "[ValidationError] note must be at most 200 characters"
        );
    }
}
