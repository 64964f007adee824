//! The cart ledger.
//!
//! [`CartLedger`] is the single owner of the session's cart. Every mutation
//! goes through `&mut self`, is written through to the store, and is
//! announced to observers before the call returns, so any read afterwards
//! sees the latest state.

use burger_cart_core::{CurrencyCode, DeliveryMethod, LineItem};
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use crate::dispatch::OrderDispatcher;
use crate::error::{self, OrderError};
use crate::events::{CartEvent, CartObserver, CartSnapshot};
use crate::message::{self, OrderRequest};
use crate::storage::{self, KeyValueStore};

/// Pricing settings applied by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSettings {
    /// Flat surcharge added when the order is delivered.
    pub delivery_fee: Decimal,
    pub currency: CurrencyCode,
}

impl LedgerSettings {
    /// 5.00 in the shop's currency.
    pub const DEFAULT_DELIVERY_FEE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            delivery_fee: Self::DEFAULT_DELIVERY_FEE,
            currency: CurrencyCode::default(),
        }
    }
}

/// Subtotal of `items` plus `delivery_fee` when `delivery` is
/// [`DeliveryMethod::Delivery`]. Nothing is rounded.
///
/// A total outside the `Decimal` range is clamped to `Decimal::MAX` or
/// `Decimal::MIN` and logged.
#[must_use]
pub fn compute_total(items: &[LineItem], delivery: DeliveryMethod, delivery_fee: Decimal) -> Decimal {
    let mut clamped = false;
    let mut total = Decimal::ZERO;
    for item in items {
        let line = item.checked_line_total().unwrap_or_else(|| {
            clamped = true;
            item.line_total()
        });
        total = add_clamped(total, line, &mut clamped);
    }
    if delivery.is_delivery() {
        total = add_clamped(total, delivery_fee, &mut clamped);
    }
    if clamped {
        warn!(items = items.len(), %total, "Cart total out of range, clamped");
    }
    total
}

fn add_clamped(total: Decimal, amount: Decimal, clamped: &mut bool) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        *clamped = true;
        total.saturating_add(amount)
    })
}

/// Session cart with write-through persistence.
pub struct CartLedger<S: KeyValueStore> {
    items: Vec<LineItem>,
    store: S,
    settings: LedgerSettings,
    delivery: DeliveryMethod,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: KeyValueStore> CartLedger<S> {
    /// Load the cart from `store`. Missing or malformed data gives an empty cart.
    pub fn load(store: S, settings: LedgerSettings) -> Self {
        let items = storage::load_cart(&store);
        info!(items = items.len(), "Cart loaded");
        Self {
            items,
            store,
            settings,
            delivery: DeliveryMethod::default(),
            observers: Vec::new(),
        }
    }

    /// Register an observer. It is notified from the next change on; call
    /// [`CartLedger::refresh`] for an initial render.
    pub fn add_observer(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// Notify observers of the current state without changing anything.
    pub fn refresh(&self) {
        self.notify(&CartEvent::Loaded);
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn settings(&self) -> &LedgerSettings {
        &self.settings
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Delivery method currently selected for snapshots.
    #[must_use]
    pub const fn delivery_method(&self) -> DeliveryMethod {
        self.delivery
    }

    /// Add one unit of `name`.
    ///
    /// A new name is appended with quantity one. For a name already in the
    /// cart only the quantity changes; `unit_price` and `image_ref` are
    /// ignored. A line already holding `u32::MAX` units is left alone and no
    /// event is sent.
    #[instrument(skip(self))]
    pub fn add_item(&mut self, name: &str, unit_price: Decimal, image_ref: &str) {
        if let Some(existing) = self.items.iter_mut().find(|item| item.name() == name) {
            if existing.quantity() == u32::MAX {
                warn!("Quantity already at its maximum, item not added");
                return;
            }
            existing.increment();
        } else {
            if unit_price.is_sign_negative() && !unit_price.is_zero() {
                warn!(%unit_price, "Adding item with a negative price");
            }
            self.items.push(LineItem::new(name, unit_price, image_ref));
        }
        self.commit(&CartEvent::ItemAdded {
            name: name.to_string(),
        });
    }

    /// Take one unit of `name` away, dropping the line at zero. Unknown names
    /// are ignored.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, name: &str) {
        let Some(index) = self.items.iter().position(|item| item.name() == name) else {
            return;
        };
        let still_held = self
            .items
            .get_mut(index)
            .is_some_and(LineItem::decrement);
        if !still_held {
            self.items.remove(index);
        }
        self.commit(&CartEvent::ItemRemoved {
            name: name.to_string(),
        });
    }

    /// Select the delivery method used by [`CartLedger::snapshot`].
    pub fn set_delivery_method(&mut self, delivery: DeliveryMethod) {
        self.delivery = delivery;
        self.notify(&CartEvent::DeliveryChanged(delivery));
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.commit(&CartEvent::Cleared);
    }

    /// Total for `delivery`. Pure; rounding is left to presentation.
    #[must_use]
    pub fn compute_total(&self, delivery: DeliveryMethod) -> Decimal {
        compute_total(&self.items, delivery, self.settings.delivery_fee)
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |count, item| count.saturating_add(item.quantity()))
    }

    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total_count: self.total_count(),
            total: self.compute_total(self.delivery),
            delivery: self.delivery,
            currency: self.settings.currency,
        }
    }

    /// Render the order message without a payment line.
    ///
    /// # Errors
    ///
    /// `EmptyCart`, `MissingContact` or `MissingAddress`, checked in that order.
    pub fn build_order_message(
        &self,
        delivery: DeliveryMethod,
        address: &str,
        phone: &str,
    ) -> Result<String, OrderError> {
        self.build_message(&OrderRequest::new(delivery, address, phone))
    }

    /// Render the order message for a full request.
    ///
    /// # Errors
    ///
    /// `EmptyCart`, `MissingContact` or `MissingAddress`, checked in that order.
    pub fn build_message(&self, request: &OrderRequest) -> Result<String, OrderError> {
        message::render(&self.items, request, &self.settings)
    }

    /// Validate, dispatch, then clear.
    ///
    /// The cart is cleared and persisted only after `dispatcher` accepted the
    /// message. Returns the dispatched message.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Order` if validation fails and
    /// `CheckoutError::Dispatch` if the hand-off fails. The cart is untouched
    /// in both cases.
    #[instrument(skip(self, dispatcher), fields(delivery = %request.delivery))]
    pub fn checkout<D: OrderDispatcher + ?Sized>(
        &mut self,
        request: &OrderRequest,
        dispatcher: &mut D,
    ) -> error::Result<String> {
        let message = self.build_message(request)?;
        dispatcher.dispatch(&message)?;

        info!(
            items = self.items.len(),
            total_count = self.total_count(),
            "Order dispatched, clearing cart"
        );
        self.clear();
        Ok(message)
    }

    fn commit(&mut self, event: &CartEvent) {
        if let Err(e) = storage::save_cart(&mut self.store, &self.items) {
            warn!(error = %e, "Failed to persist cart");
        }
        self.notify(event);
    }

    fn notify(&self, event: &CartEvent) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.cart_changed(event, &snapshot);
        }
    }
}
