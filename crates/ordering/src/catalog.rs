//! Menu catalog, search and product image galleries.
//!
//! The menu is a JSON array of [`MenuItem`]s. A default menu ships with the
//! crate; deployments can point at their own file instead.

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_MENU: &str = include_str!("../menu.json");

/// Catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid menu: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate menu item: {0}")]
    DuplicateItem(String),
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}

/// A dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    /// Thumbnail shown in the menu grid and stored with cart lines.
    #[serde(default)]
    pub image: String,
    /// Larger images for the product view.
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl MenuItem {
    /// Image carousel for the product view. Falls back to the thumbnail
    /// when the item has no gallery.
    #[must_use]
    pub fn carousel(&self) -> ImageCarousel {
        if self.gallery.is_empty() {
            let images = if self.image.is_empty() {
                Vec::new()
            } else {
                vec![self.image.clone()]
            };
            ImageCarousel::new(images)
        } else {
            ImageCarousel::new(self.gallery.clone())
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// The shop's menu.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu, rejecting duplicate names (cart lines are keyed by name).
    ///
    /// # Errors
    ///
    /// Returns `DuplicateItem` if two items share a name.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        for (index, item) in items.iter().enumerate() {
            if items.iter().take(index).any(|other| other.name == item.name) {
                return Err(CatalogError::DuplicateItem(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Parse a menu from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or names repeat.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The menu bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled menu is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_MENU)
    }

    /// Load a menu file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Items whose name or description contains `term`, ignoring case.
    /// An empty term matches everything.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&MenuItem> {
        let needle = term.trim().to_lowercase();
        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }

    /// Look up an item by exact name, falling back to a case-insensitive match.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        let name = name.trim();
        self.items
            .iter()
            .find(|item| item.name == name)
            .or_else(|| {
                let lower = name.to_lowercase();
                self.items.iter().find(|item| item.name.to_lowercase() == lower)
            })
    }
}

/// Parse a displayed price such as `$12,90`, `R$ 24.90` or `1.234,50`.
///
/// A comma is read as the decimal separator; when one is present, dots are
/// treated as thousands separators.
///
/// # Errors
///
/// Returns `InvalidPrice` if no number remains after stripping the symbol.
pub fn parse_price_text(text: &str) -> Result<Decimal, CatalogError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("R$")
        .or_else(|| trimmed.strip_prefix('$'))
        .unwrap_or(trimmed)
        .trim();
    let normalized = if digits.contains(',') {
        digits.replace('.', "").replace(',', ".")
    } else {
        digits.to_string()
    };
    Decimal::from_str(&normalized).map_err(|_| CatalogError::InvalidPrice(text.to_string()))
}

/// Position within a product's images. Navigation wraps around at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCarousel {
    images: Vec<String>,
    index: usize,
}

impl ImageCarousel {
    #[must_use]
    pub const fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether previous/next arrows should be shown.
    #[must_use]
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    pub fn next(&mut self) {
        if self.has_navigation() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn previous(&mut self) {
        if self.has_navigation() {
            self.index = self
                .index
                .checked_sub(1)
                .unwrap_or(self.images.len() - 1);
        }
    }

    /// Jump to `index`, wrapping past the end.
    pub fn select(&mut self, index: usize) {
        if !self.images.is_empty() {
            self.index = index % self.images.len();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn item(name: &str, description: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            description: description.to_string(),
            price: Decimal::TEN,
            image: format!("{name}.jpg"),
            gallery: Vec::new(),
        }
    }

    #[test]
    fn test_builtin_menu_parses() {
        let menu = Menu::builtin().unwrap();
        assert!(!menu.items().is_empty());
        assert!(menu.find("Cheese Burguer").is_some());
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let menu = Menu::new(vec![
            item("Cheese Burguer", "cheddar duplo"),
            item("batata frita", "crocante"),
            item("Frappe", "chocolate gelado"),
        ])
        .unwrap();

        let names: Vec<_> = menu.search("BURGUER").into_iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Cheese Burguer"]);

        let names: Vec<_> = menu.search("Chocolate").into_iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Frappe"]);

        assert_eq!(menu.search("").len(), 3);
        assert!(menu.search("pizza").is_empty());
    }

    #[test]
    fn test_find_falls_back_to_case_insensitive() {
        let menu = Menu::new(vec![item("Cheese Burguer", "")]).unwrap();
        assert_eq!(menu.find("cheese burguer").unwrap().name, "Cheese Burguer");
        assert!(menu.find("Cheese").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Menu::new(vec![item("Burger", ""), item("Burger", "again")]);
        assert!(matches!(result, Err(CatalogError::DuplicateItem(name)) if name == "Burger"));
    }

    #[test]
    fn test_parse_price_text() {
        assert_eq!(parse_price_text("$12,90").unwrap(), Decimal::new(1290, 2));
        assert_eq!(parse_price_text("R$ 24.90").unwrap(), Decimal::new(2490, 2));
        assert_eq!(parse_price_text(" 1.234,50 ").unwrap(), Decimal::new(123_450, 2));
        assert_eq!(parse_price_text("7").unwrap(), Decimal::new(7, 0));
        assert!(matches!(
            parse_price_text("R$ grátis"),
            Err(CatalogError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut carousel =
            ImageCarousel::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(carousel.current(), Some("a"));
        carousel.previous();
        assert_eq!(carousel.current(), Some("c"));
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), Some("b"));
        carousel.select(5);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_single_image_carousel_does_not_move() {
        let mut carousel = item("Burger", "").carousel();
        assert_eq!(carousel.len(), 1);
        assert!(!carousel.has_navigation());
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current(), Some("Burger.jpg"));
    }

    #[test]
    fn test_gallery_preferred_over_thumbnail() {
        let mut burger = item("Burger", "");
        burger.gallery = vec!["big-1.jpg".to_string(), "big-2.jpg".to_string()];
        let carousel = burger.carousel();
        assert!(carousel.has_navigation());
        assert_eq!(carousel.current(), Some("big-1.jpg"));
    }
}
