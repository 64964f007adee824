//! Order options chosen at checkout: delivery and payment.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::{CurrencyCode, Money};

/// Errors that can occur when parsing order options.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderOptionError {
    /// Unknown delivery method.
    #[error("invalid delivery method: {0}")]
    InvalidDeliveryMethod(String),
    /// Unknown payment method.
    #[error("invalid payment method: {0}")]
    InvalidPaymentMethod(String),
    /// Unknown card type.
    #[error("invalid card type: {0}")]
    InvalidCardType(String),
    /// Card payment chosen without saying debit or credit.
    #[error("choose debit or credit for card payments")]
    MissingCardType,
}

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    /// Customer collects the order at the shop.
    #[default]
    Pickup,
    /// Order is delivered to an address; a surcharge applies.
    Delivery,
}

impl DeliveryMethod {
    #[must_use]
    pub const fn is_delivery(&self) -> bool {
        matches!(self, Self::Delivery)
    }

    /// Label used in order messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pickup => "Retirada",
            Self::Delivery => "Entrega",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pickup => write!(f, "pickup"),
            Self::Delivery => write!(f, "delivery"),
        }
    }
}

impl std::str::FromStr for DeliveryMethod {
    type Err = OrderOptionError;

    /// Accepts `pickup`/`delivery` and the ordering page's `retirada`/`entrega`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pickup" | "retirada" => Ok(Self::Pickup),
            "delivery" | "entrega" => Ok(Self::Delivery),
            _ => Err(OrderOptionError::InvalidDeliveryMethod(s.to_string())),
        }
    }
}

/// Card type for card payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Debit,
    Credit,
}

impl std::str::FromStr for CardType {
    type Err = OrderOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debit" | "debito" | "débito" => Ok(Self::Debit),
            "credit" | "credito" | "crédito" => Ok(Self::Credit),
            _ => Err(OrderOptionError::InvalidCardType(s.to_string())),
        }
    }
}

/// How the customer pays on receipt. Nothing is charged by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PaymentMethod {
    /// Instant bank transfer.
    Pix,
    /// Cash, optionally asking for change for a larger note.
    Cash { change_for: Option<Decimal> },
    /// Card machine brought along with the order.
    Card { card_type: CardType },
}

impl PaymentMethod {
    /// Build a payment method from loose form values.
    ///
    /// `kind` accepts `pix`, `cash`/`dinheiro` and `card`/`cartao`/`cartão`.
    /// `change_for` is only used for cash and `card_type` only for cards.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` is unknown or a card payment has no card type.
    pub fn from_parts(
        kind: &str,
        change_for: Option<Decimal>,
        card_type: Option<CardType>,
    ) -> Result<Self, OrderOptionError> {
        match kind.trim().to_lowercase().as_str() {
            "pix" => Ok(Self::Pix),
            "cash" | "dinheiro" => Ok(Self::Cash { change_for }),
            "card" | "cartao" | "cartão" => card_type
                .map(|card_type| Self::Card { card_type })
                .ok_or(OrderOptionError::MissingCardType),
            _ => Err(OrderOptionError::InvalidPaymentMethod(kind.to_string())),
        }
    }

    /// Label used in order messages.
    #[must_use]
    pub fn label(&self, currency: CurrencyCode) -> String {
        match self {
            Self::Pix => "💸 Pix".to_string(),
            Self::Cash {
                change_for: Some(amount),
            } => format!("💵 Dinheiro (Troco para {})", Money::new(*amount, currency)),
            Self::Cash { change_for: None } => "💵 Dinheiro (Sem troco)".to_string(),
            Self::Card {
                card_type: CardType::Debit,
            } => "💳 Cartão Débito".to_string(),
            Self::Card {
                card_type: CardType::Credit,
            } => "💳 Cartão Crédito".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_method_from_str() {
        assert_eq!(
            "delivery".parse::<DeliveryMethod>().unwrap(),
            DeliveryMethod::Delivery
        );
        assert_eq!(
            "Entrega".parse::<DeliveryMethod>().unwrap(),
            DeliveryMethod::Delivery
        );
        assert_eq!(
            "retirada".parse::<DeliveryMethod>().unwrap(),
            DeliveryMethod::Pickup
        );
        assert!(matches!(
            "drone".parse::<DeliveryMethod>(),
            Err(OrderOptionError::InvalidDeliveryMethod(_))
        ));
    }

    #[test]
    fn test_delivery_method_default_is_pickup() {
        assert_eq!(DeliveryMethod::default(), DeliveryMethod::Pickup);
        assert!(!DeliveryMethod::Pickup.is_delivery());
    }

    #[test]
    fn test_payment_from_parts() {
        assert_eq!(
            PaymentMethod::from_parts("pix", None, None).unwrap(),
            PaymentMethod::Pix
        );
        assert_eq!(
            PaymentMethod::from_parts("cartao", None, Some(CardType::Credit)).unwrap(),
            PaymentMethod::Card {
                card_type: CardType::Credit
            }
        );
        assert_eq!(
            PaymentMethod::from_parts("card", None, None),
            Err(OrderOptionError::MissingCardType)
        );
        assert!(matches!(
            PaymentMethod::from_parts("cheque", None, None),
            Err(OrderOptionError::InvalidPaymentMethod(_))
        ));
    }

    #[test]
    fn test_payment_labels() {
        let brl = CurrencyCode::BRL;
        assert_eq!(PaymentMethod::Pix.label(brl), "💸 Pix");
        assert_eq!(
            PaymentMethod::Cash {
                change_for: Some(Decimal::new(50, 0))
            }
            .label(brl),
            "💵 Dinheiro (Troco para R$ 50.00)"
        );
        assert_eq!(
            PaymentMethod::Cash { change_for: None }.label(brl),
            "💵 Dinheiro (Sem troco)"
        );
        assert_eq!(
            PaymentMethod::Card {
                card_type: CardType::Debit
            }
            .label(brl),
            "💳 Cartão Débito"
        );
    }

    #[test]
    fn test_card_type_accepts_accents() {
        assert_eq!("Débito".parse::<CardType>().unwrap(), CardType::Debit);
        assert_eq!("credito".parse::<CardType>().unwrap(), CardType::Credit);
    }
}
