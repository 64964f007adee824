//! Observer port for renderers.
//!
//! The ledger never draws anything. After each change it builds a
//! [`CartSnapshot`] and hands it, together with the [`CartEvent`] that caused
//! it, to every registered [`CartObserver`].

use burger_cart_core::{CurrencyCode, DeliveryMethod, LineItem, Money};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

/// Display-ready copy of the cart state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    /// Sum of all quantities (the header badge).
    pub total_count: u32,
    /// Total for `delivery`, unrounded.
    pub total: Decimal,
    pub delivery: DeliveryMethod,
    pub currency: CurrencyCode,
}

impl CartSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The total as it should be shown, e.g. `Total: R$ 25.00`.
    #[must_use]
    pub fn total_label(&self) -> String {
        format!("Total: {}", Money::new(self.total, self.currency))
    }
}

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// Cart was loaded from storage at startup.
    Loaded,
    ItemAdded { name: String },
    ItemRemoved { name: String },
    DeliveryChanged(DeliveryMethod),
    /// Cart was emptied, normally after checkout.
    Cleared,
}

impl CartEvent {
    /// Short notice for a transient toast, if the event warrants one.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::ItemAdded { name } => Some(format!("{name} adicionado ao carrinho!")),
            _ => None,
        }
    }
}

/// Receives cart changes, e.g. to re-render a cart modal.
pub trait CartObserver {
    fn cart_changed(&self, event: &CartEvent, snapshot: &CartSnapshot);
}

/// Logs every change through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl CartObserver for LogObserver {
    fn cart_changed(&self, event: &CartEvent, snapshot: &CartSnapshot) {
        if let Some(notice) = event.notice() {
            info!(%notice);
        }
        info!(
            ?event,
            items = snapshot.items.len(),
            total_count = snapshot.total_count,
            total = %Money::new(snapshot.total, snapshot.currency),
            "Cart updated"
        );
    }
}
