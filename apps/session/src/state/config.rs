//! # Configuration State
//!
//! Stores session configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TEACART_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::Serialize;
use teacart_core::{Menu, Money, DEFAULT_TOPPING_CAP};

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the order header
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol, written after the amount ("25.000đ")
    pub currency_symbol: String,

    /// How many toppings one drink may take
    pub topping_cap: usize,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "TeaCart"
    /// - Currency: VND (đ)
    /// - Topping cap: 2
    fn default() -> Self {
        ConfigState {
            store_name: "TeaCart".to_string(),
            currency_code: "VND".to_string(),
            currency_symbol: "đ".to_string(),
            topping_cap: DEFAULT_TOPPING_CAP,
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables over the defaults.
    ///
    /// ## Environment Variables
    /// - `TEACART_STORE_NAME`: Override store name
    /// - `TEACART_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TEACART_TOPPING_CAP`: Override topping cap (non-negative integer)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("TEACART_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("TEACART_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(cap) = lookup("TEACART_TOPPING_CAP") {
            config.topping_cap = cap
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TEACART_TOPPING_CAP".to_string()))?;
        }

        Ok(config)
    }

    /// The drink menu with this session's topping cap applied.
    pub fn menu(&self) -> Menu {
        Menu::default_drinks().with_topping_cap(self.topping_cap)
    }

    /// Formats an amount the way the order screen does.
    ///
    /// ## Example
    /// ```rust
    /// use teacart_core::Money;
    /// use teacart_session::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_dong(110_000)), "110.000đ");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!("{}{}", amount.grouped(), self.currency_symbol)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ConfigState::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.menu().topping_cap(), 2);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("TEACART_STORE_NAME", "Quán Trà Chiều"),
            ("TEACART_CURRENCY_SYMBOL", " VND"),
            ("TEACART_TOPPING_CAP", " 3 "),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Quán Trà Chiều");
        assert_eq!(config.topping_cap, 3);
        assert_eq!(config.menu().topping_cap(), 3);
        assert_eq!(config.format_currency(Money::from_dong(25_000)), "25.000 VND");
    }

    #[test]
    fn test_bad_topping_cap_is_an_error() {
        let err = ConfigState::from_lookup(lookup_from(&[("TEACART_TOPPING_CAP", "two")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TEACART_TOPPING_CAP");

        assert!(ConfigState::from_lookup(lookup_from(&[("TEACART_TOPPING_CAP", "-1")])).is_err());
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_dong(0)), "0đ");
        assert_eq!(config.format_currency(Money::from_dong(2_000)), "2.000đ");
        assert_eq!(config.format_currency(Money::from_dong(1_234_567)), "1.234.567đ");
        assert_eq!(config.format_currency(Money::from_dong(-15_000)), "-15.000đ");
    }
}
