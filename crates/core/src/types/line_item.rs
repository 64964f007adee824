//! Cart line items.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product entry in a cart together with its quantity.
///
/// The quantity is a [`NonZeroU32`], so an item can never be held at zero:
/// [`LineItem::decrement`] reports when the item should leave the cart
/// instead.
///
/// The serialized field names (`price`, `imageSrc`) match the records the
/// ordering page keeps in browser storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    name: String,
    #[serde(rename = "price")]
    unit_price: Decimal,
    #[serde(rename = "imageSrc", default)]
    image_ref: String,
    quantity: NonZeroU32,
}

impl LineItem {
    /// Create a line item with a quantity of one.
    #[must_use]
    pub fn new(name: impl Into<String>, unit_price: Decimal, image_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
            quantity: NonZeroU32::MIN,
        }
    }

    /// Replace the quantity.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: NonZeroU32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price times quantity, unrounded. Clamps to the `Decimal` range.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price
            .saturating_mul(Decimal::from(self.quantity.get()))
    }

    /// Unit price times quantity, or `None` if it leaves the `Decimal` range.
    #[must_use]
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity.get()))
    }

    /// Add one unit. Saturates at `u32::MAX`.
    pub const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Add `count` units. Saturates at `u32::MAX`.
    pub const fn add_quantity(&mut self, count: NonZeroU32) {
        self.quantity = self.quantity.saturating_add(count.get());
    }

    /// Take one unit away.
    ///
    /// Returns `false` without changing anything when the item holds a
    /// single unit; the caller removes it from the cart.
    pub fn decrement(&mut self) -> bool {
        match NonZeroU32::new(self.quantity.get() - 1) {
            Some(quantity) => {
                self.quantity = quantity;
                true
            }
            None => false,
        }
    }
}
