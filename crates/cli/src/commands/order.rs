//! Order preview and checkout.

use std::io::Write;

use burger_cart_core::{CardType, DeliveryMethod, OrderOptionError, PaymentMethod};
use burger_cart_ordering::catalog::{CatalogError, parse_price_text};
use burger_cart_ordering::dispatch::DeepLinkDispatcher;
use burger_cart_ordering::{OrderRequest, OrderingConfig};
use clap::Args;
use rust_decimal::Decimal;

use super::open_ledger;

/// Customer input for an order.
#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Delivery method (`pickup`/`retirada`, `delivery`/`entrega`)
    #[arg(short, long, default_value_t = DeliveryMethod::Pickup)]
    pub delivery: DeliveryMethod,

    /// Delivery address (required for delivery)
    #[arg(short, long, default_value = "")]
    pub address: String,

    /// Contact phone
    #[arg(short, long, default_value = "")]
    pub phone: String,

    /// Payment method (`pix`, `cash`/`dinheiro`, `card`/`cartao`)
    #[arg(long)]
    pub payment: Option<String>,

    /// Cash payments: note to give change for (e.g. "50,00")
    #[arg(long)]
    pub change: Option<String>,

    /// Card payments: `debit` or `credit`
    #[arg(long)]
    pub card: Option<CardType>,
}

/// Errors turning CLI arguments into an order request.
#[derive(Debug, thiserror::Error)]
pub enum OrderArgsError {
    #[error(transparent)]
    Payment(#[from] OrderOptionError),
    #[error(transparent)]
    Change(#[from] CatalogError),
}

impl OrderArgs {
    /// Build the order request.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment options are inconsistent or the change
    /// amount cannot be parsed.
    pub fn to_request(&self) -> Result<OrderRequest, OrderArgsError> {
        let request = OrderRequest::new(self.delivery, self.address.as_str(), self.phone.as_str());
        let Some(kind) = self.payment.as_deref() else {
            return Ok(request);
        };

        let change_for: Option<Decimal> = self
            .change
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(parse_price_text)
            .transpose()?;
        let payment = PaymentMethod::from_parts(kind, change_for, self.card)?;
        Ok(request.with_payment(payment))
    }
}

/// Print the order message without sending it or touching the cart.
///
/// # Errors
///
/// Returns an error if the arguments or the order are invalid, or output fails.
pub fn preview(
    config: &OrderingConfig,
    args: &OrderArgs,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let ledger = open_ledger(config);
    let message = ledger.build_message(&args.to_request()?)?;
    writeln!(out, "{message}")?;
    Ok(())
}

/// Send the order and empty the cart.
///
/// The deep link is written to `out`; opening it hands the message to
/// WhatsApp.
///
/// # Errors
///
/// Returns an error if the arguments or the order are invalid, or the link
/// cannot be written. The cart is kept in every error case.
pub fn checkout(
    config: &OrderingConfig,
    args: &OrderArgs,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = args.to_request()?;
    let mut ledger = open_ledger(config);
    ledger.set_delivery_method(request.delivery);

    {
        let mut dispatcher = DeepLinkDispatcher::new(config.whatsapp_number.as_str(), &mut *out);
        ledger.checkout(&request, &mut dispatcher)?;
    }

    writeln!(out, "Pedido enviado com sucesso! Aguarde confirmação via WhatsApp.")?;
    Ok(())
}
