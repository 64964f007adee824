//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are kept at full precision everywhere. Rounding to two decimal
//! places happens only when a [`Money`] value is rendered.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Number of decimal places shown when rendering an amount.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// The amount rounded for presentation (half away from zero).
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// The rounded amount with exactly two decimals and no symbol (e.g., `20.00`).
    #[must_use]
    pub fn amount_text(&self) -> String {
        format!("{:.2}", self.rounded())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency_code.symbol(), self.amount_text())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Symbol printed before amounts.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Self::BRL),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_two_decimals() {
        let money = Money::new(Decimal::new(20, 0), CurrencyCode::BRL);
        assert_eq!(money.to_string(), "R$ 20.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        let money = Money::new(Decimal::new(10_005, 3), CurrencyCode::BRL);
        assert_eq!(money.amount_text(), "10.01");

        let money = Money::new(Decimal::new(-10_005, 3), CurrencyCode::USD);
        assert_eq!(money.to_string(), "$ -10.01");
    }

    #[test]
    fn test_rounding_does_not_touch_amount() {
        let money = Money::new(Decimal::new(3_333, 3), CurrencyCode::EUR);
        assert_eq!(money.amount_text(), "3.33");
        assert_eq!(money.amount, Decimal::new(3_333, 3));
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("brl".parse::<CurrencyCode>().unwrap(), CurrencyCode::BRL);
        assert_eq!(" USD ".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert!("JPY".parse::<CurrencyCode>().is_err());
    }
}
