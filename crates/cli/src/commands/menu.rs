//! Menu browsing.

use std::io::Write;

use burger_cart_core::Money;
use burger_cart_ordering::OrderingConfig;
use tracing::info;

use super::load_menu;

/// List menu items, optionally filtered by `search`.
///
/// # Errors
///
/// Returns an error if the menu cannot be loaded or output fails.
pub fn list(
    config: &OrderingConfig,
    search: Option<&str>,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let menu = load_menu(config)?;
    let items = menu.search(search.unwrap_or_default());
    info!(matches = items.len(), "Menu listed");

    if items.is_empty() {
        writeln!(out, "Nenhum item encontrado.")?;
        return Ok(());
    }
    for item in items {
        writeln!(
            out,
            "{} - {}",
            item.name,
            Money::new(item.price, config.currency)
        )?;
        if !item.description.is_empty() {
            writeln!(out, "    {}", item.description)?;
        }
    }
    Ok(())
}

/// Show the image at `index` of a product's gallery.
///
/// # Errors
///
/// Returns an error if the menu cannot be loaded, the item is unknown, or
/// output fails.
pub fn gallery(
    config: &OrderingConfig,
    name: &str,
    index: usize,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let menu = load_menu(config)?;
    let item = menu
        .find(name)
        .ok_or_else(|| format!("Item not on the menu: {name}"))?;

    let mut carousel = item.carousel();
    carousel.select(index);
    match carousel.current() {
        Some(image) if carousel.has_navigation() => writeln!(
            out,
            "[{}/{}] {image}",
            carousel.index() + 1,
            carousel.len()
        )?,
        Some(image) => writeln!(out, "{image}")?,
        None => writeln!(out, "Sem imagens para {}.", item.name)?,
    }
    Ok(())
}
