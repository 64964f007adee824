//! Ordering configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `BURGER_CART_DATA_DIR` - Directory for the stored cart (default: `.burger-cart`)
//! - `BURGER_CART_WHATSAPP_NUMBER` - Shop's WhatsApp number, digits only
//!   (default: `5511976724548`)
//! - `BURGER_CART_DELIVERY_FEE` - Delivery surcharge (default: `5.00`)
//! - `BURGER_CART_CURRENCY` - `BRL`, `USD` or `EUR` (default: `BRL`)
//! - `BURGER_CART_MENU_PATH` - JSON menu replacing the built-in one

use std::path::PathBuf;
use std::str::FromStr;

use burger_cart_core::CurrencyCode;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::LedgerSettings;

const DEFAULT_DATA_DIR: &str = ".burger-cart";
const DEFAULT_WHATSAPP_NUMBER: &str = "5511976724548";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Ordering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingConfig {
    /// Directory holding the file-backed store
    pub data_dir: PathBuf,
    /// Destination of order messages, international format without `+`
    pub whatsapp_number: String,
    /// Flat surcharge for delivery orders
    pub delivery_fee: Decimal,
    /// Currency used when rendering amounts
    pub currency: CurrencyCode,
    /// Optional menu file overriding the built-in menu
    pub menu_path: Option<PathBuf>,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            delivery_fee: LedgerSettings::DEFAULT_DELIVERY_FEE,
            currency: CurrencyCode::default(),
            menu_path: None,
        }
    }
}

impl OrderingConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("BURGER_CART_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);

        let whatsapp_number = lookup("BURGER_CART_WHATSAPP_NUMBER")
            .map_or(defaults.whatsapp_number, |value| value.trim().to_string());
        validate_whatsapp_number(&whatsapp_number)?;

        let delivery_fee = match lookup("BURGER_CART_DELIVERY_FEE") {
            Some(value) => parse_delivery_fee(&value)?,
            None => defaults.delivery_fee,
        };

        let currency = match lookup("BURGER_CART_CURRENCY") {
            Some(value) => CurrencyCode::from_str(&value)
                .map_err(|e| invalid("BURGER_CART_CURRENCY", e))?,
            None => defaults.currency,
        };

        let menu_path = lookup("BURGER_CART_MENU_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            data_dir,
            whatsapp_number,
            delivery_fee,
            currency,
            menu_path,
        })
    }

    /// Pricing settings for the ledger.
    #[must_use]
    pub const fn ledger_settings(&self) -> LedgerSettings {
        LedgerSettings {
            delivery_fee: self.delivery_fee,
            currency: self.currency,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn invalid(key: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), reason.to_string())
}

/// The number goes straight into a `wa.me` path, so only digits are allowed.
fn validate_whatsapp_number(number: &str) -> Result<(), ConfigError> {
    if number.is_empty() {
        return Err(ConfigError::MissingEnvVar(
            "BURGER_CART_WHATSAPP_NUMBER".to_string(),
        ));
    }
    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(
            "BURGER_CART_WHATSAPP_NUMBER",
            "must contain digits only (country code included, no '+')",
        ));
    }
    Ok(())
}

fn parse_delivery_fee(value: &str) -> Result<Decimal, ConfigError> {
    let fee = Decimal::from_str(value.trim()).map_err(|e| invalid("BURGER_CART_DELIVERY_FEE", e))?;
    if fee.is_sign_negative() && !fee.is_zero() {
        return Err(invalid("BURGER_CART_DELIVERY_FEE", "must not be negative"));
    }
    Ok(fee)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = OrderingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, OrderingConfig::default());
        assert_eq!(config.ledger_settings(), LedgerSettings::default());
    }

    #[test]
    fn test_overrides() {
        let config = OrderingConfig::from_lookup(lookup_from(&[
            ("BURGER_CART_DATA_DIR", "/var/lib/burger"),
            ("BURGER_CART_WHATSAPP_NUMBER", " 5511999999999 "),
            ("BURGER_CART_DELIVERY_FEE", "7.50"),
            ("BURGER_CART_CURRENCY", "usd"),
            ("BURGER_CART_MENU_PATH", "menu.json"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/burger"));
        assert_eq!(config.whatsapp_number, "5511999999999");
        assert_eq!(config.delivery_fee, Decimal::new(750, 2));
        assert_eq!(config.currency, CurrencyCode::USD);
        assert_eq!(config.menu_path, Some(PathBuf::from("menu.json")));
    }

    #[test]
    fn test_invalid_fee() {
        let result = OrderingConfig::from_lookup(lookup_from(&[("BURGER_CART_DELIVERY_FEE", "five")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(key, _)) if key == "BURGER_CART_DELIVERY_FEE"));

        let result = OrderingConfig::from_lookup(lookup_from(&[("BURGER_CART_DELIVERY_FEE", "-1")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_whatsapp_number() {
        let result =
            OrderingConfig::from_lookup(lookup_from(&[("BURGER_CART_WHATSAPP_NUMBER", "+55 11")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));

        let result = OrderingConfig::from_lookup(lookup_from(&[("BURGER_CART_WHATSAPP_NUMBER", "")]));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn test_invalid_currency() {
        let result = OrderingConfig::from_lookup(lookup_from(&[("BURGER_CART_CURRENCY", "JPY")]));
        assert!(result.is_err());
    }
}
