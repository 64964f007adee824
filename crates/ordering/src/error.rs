//! Order validation and checkout errors.
//!
//! Both are recoverable: the caller shows the `Display` text, the customer
//! corrects the input and retries. Storage problems never surface here; the
//! ledger degrades to an empty cart instead.

use thiserror::Error;

use crate::dispatch::DispatchError;

/// Validation failures when building an order message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    /// The cart has no line items.
    #[error("Carrinho vazio!")]
    EmptyCart,

    /// No contact phone was given.
    #[error("Por favor, informe seu telefone.")]
    MissingContact,

    /// Delivery was chosen without an address.
    #[error("Por favor, informe o endereço para entrega.")]
    MissingAddress,
}

/// Checkout failures. The cart is left unchanged in every case.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The order did not pass validation.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// The message could not be handed to the messaging channel.
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Result type alias for `CheckoutError`.
pub type Result<T> = std::result::Result<T, CheckoutError>;
