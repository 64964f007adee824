//! Order message rendering.
//!
//! The layout is fixed, one field per line:
//!
//! ```text
//! Olá, gostaria de fazer um pedido:
//! 2x Burger - R$ 20.00
//! Método: Entrega
//! Endereço: Rua das Flores, 10
//! Taxa de entrega: R$ 5.00
//! Telefone: 11 99999-0000
//! Pagamento: 💸 Pix
//! Total: R$ 25.00
//! Obrigado!
//! ```
//!
//! The address and fee lines appear only for delivery, the payment line only
//! when a payment method was chosen.

use burger_cart_core::{DeliveryMethod, LineItem, Money, PaymentMethod};

use crate::error::OrderError;
use crate::ledger::{LedgerSettings, compute_total};

const GREETING: &str = "Olá, gostaria de fazer um pedido:";
const CLOSING: &str = "Obrigado!";

/// Customer input collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderRequest {
    pub delivery: DeliveryMethod,
    pub address: String,
    pub phone: String,
    pub payment: Option<PaymentMethod>,
}

impl OrderRequest {
    #[must_use]
    pub fn new(
        delivery: DeliveryMethod,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            delivery,
            address: address.into(),
            phone: phone.into(),
            payment: None,
        }
    }

    #[must_use]
    pub const fn with_payment(mut self, payment: PaymentMethod) -> Self {
        self.payment = Some(payment);
        self
    }

    /// Check the request against `items` without rendering anything.
    ///
    /// # Errors
    ///
    /// In order of precedence: `EmptyCart`, `MissingContact`, `MissingAddress`.
    pub fn validate(&self, items: &[LineItem]) -> Result<(), OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        if self.phone.trim().is_empty() {
            return Err(OrderError::MissingContact);
        }
        if self.delivery.is_delivery() && self.address.trim().is_empty() {
            return Err(OrderError::MissingAddress);
        }
        Ok(())
    }
}

/// Render the order message for `items`.
///
/// # Errors
///
/// Returns the first validation failure from [`OrderRequest::validate`].
pub fn render(
    items: &[LineItem],
    request: &OrderRequest,
    settings: &LedgerSettings,
) -> Result<String, OrderError> {
    request.validate(items)?;

    let money = |amount| Money::new(amount, settings.currency);
    let mut lines = Vec::with_capacity(items.len() + 7);

    lines.push(GREETING.to_string());
    for item in items {
        lines.push(format!(
            "{}x {} - {}",
            item.quantity(),
            item.name(),
            money(item.line_total())
        ));
    }

    lines.push(format!("Método: {}", request.delivery.label()));
    if request.delivery.is_delivery() {
        lines.push(format!("Endereço: {}", request.address.trim()));
        lines.push(format!("Taxa de entrega: {}", money(settings.delivery_fee)));
    }
    lines.push(format!("Telefone: {}", request.phone.trim()));
    if let Some(payment) = &request.payment {
        lines.push(format!("Pagamento: {}", payment.label(settings.currency)));
    }

    let total = compute_total(items, request.delivery, settings.delivery_fee);
    lines.push(format!("Total: {}", money(total)));
    lines.push(CLOSING.to_string());

    Ok(lines.join("\n"))
}
