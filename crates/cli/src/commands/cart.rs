//! Cart management.

use std::io::Write;

use burger_cart_core::{DeliveryMethod, Money};
use burger_cart_ordering::OrderingConfig;
use burger_cart_ordering::catalog::parse_price_text;
use tracing::info;

use super::{load_menu, open_ledger};

/// Add one unit of `name`.
///
/// Menu items take their price and image from the menu. Anything else needs
/// an explicit `price`.
///
/// # Errors
///
/// Returns an error if the item is unknown and no price is given, the price
/// text is invalid, or output fails.
pub fn add(
    config: &OrderingConfig,
    name: &str,
    price: Option<&str>,
    image: Option<&str>,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let (name, unit_price, image) = if let Some(price) = price {
        (
            name.to_string(),
            parse_price_text(price)?,
            image.unwrap_or_default().to_string(),
        )
    } else {
        let menu = load_menu(config)?;
        let item = menu
            .find(name)
            .ok_or_else(|| format!("Item not on the menu: {name} (pass --price to add it anyway)"))?;
        (
            item.name.clone(),
            item.price,
            image.map_or_else(|| item.image.clone(), str::to_string),
        )
    };

    let mut ledger = open_ledger(config);
    ledger.add_item(&name, unit_price, &image);
    writeln!(out, "{name} adicionado ao carrinho! ({} itens)", ledger.total_count())?;
    Ok(())
}

/// Remove one unit of `name`.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn remove(
    config: &OrderingConfig,
    name: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = open_ledger(config);
    if ledger.get(name).is_none() {
        info!(name, "Item not in cart");
    }
    ledger.remove_item(name);
    writeln!(out, "{} itens no carrinho", ledger.total_count())?;
    Ok(())
}

/// Print the cart with its total for `delivery`.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn show(
    config: &OrderingConfig,
    delivery: DeliveryMethod,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = open_ledger(config);
    ledger.set_delivery_method(delivery);
    let snapshot = ledger.snapshot();

    if snapshot.is_empty() {
        writeln!(out, "Carrinho vazio!")?;
        return Ok(());
    }
    for item in &snapshot.items {
        writeln!(
            out,
            "{}x {} - {}",
            item.quantity(),
            item.name(),
            Money::new(item.line_total(), snapshot.currency)
        )?;
    }
    if delivery.is_delivery() {
        writeln!(
            out,
            "Taxa de entrega: {}",
            Money::new(config.delivery_fee, snapshot.currency)
        )?;
    }
    writeln!(out, "Itens: {}", snapshot.total_count)?;
    writeln!(out, "{}", snapshot.total_label())?;
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn clear(config: &OrderingConfig, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = open_ledger(config);
    ledger.clear();
    writeln!(out, "Carrinho vazio!")?;
    Ok(())
}
