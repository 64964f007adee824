//! Integration tests for cart persistence across sessions.
//!
//! Each test opens the ledger, mutates it, then reopens it over the same
//! data directory the way a fresh process would.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use burger_cart_core::DeliveryMethod;
use burger_cart_integration_tests::TestDir;
use burger_cart_ordering::storage::{CART_KEY, KeyValueStore};
use rust_decimal::Decimal;

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

// =============================================================================
// Round Trips
// =============================================================================

#[test]
fn test_fresh_directory_starts_empty() {
    let dir = TestDir::new();
    let ledger = dir.open_ledger();
    assert!(ledger.is_empty());
    assert_eq!(ledger.total_count(), 0);
}

#[test]
fn test_cart_survives_reopen() {
    let dir = TestDir::new();
    {
        let mut ledger = dir.open_ledger();
        ledger.add_item("Cheese Burguer", price(2590), "cheese.jpg");
        ledger.add_item("Cheese Burguer", price(2590), "cheese.jpg");
        ledger.add_item("batata frita", price(1290), "fries.jpg");
    }

    let ledger = dir.open_ledger();
    assert_eq!(ledger.items().len(), 2);
    assert_eq!(ledger.get("Cheese Burguer").unwrap().quantity(), 2);
    assert_eq!(ledger.total_count(), 3);
    assert_eq!(ledger.compute_total(DeliveryMethod::Pickup), price(6470));
    assert_eq!(ledger.compute_total(DeliveryMethod::Delivery), price(6970));
}

#[test]
fn test_removal_survives_reopen() {
    let dir = TestDir::new();
    {
        let mut ledger = dir.open_ledger();
        ledger.add_item("Burger", price(1000), "");
        ledger.add_item("Fries", price(800), "");
        ledger.remove_item("Burger");
    }

    let ledger = dir.open_ledger();
    assert!(ledger.get("Burger").is_none());
    assert_eq!(ledger.items()[0].name(), "Fries");
}

#[test]
fn test_first_price_wins_across_sessions() {
    let dir = TestDir::new();
    dir.open_ledger().add_item("Burger", price(1000), "a.jpg");

    let mut ledger = dir.open_ledger();
    ledger.add_item("Burger", price(5000), "b.jpg");
    let burger = ledger.get("Burger").unwrap();
    assert_eq!(burger.quantity(), 2);
    assert_eq!(burger.unit_price(), price(1000));
}

// =============================================================================
// Degraded Storage
// =============================================================================

#[test]
fn test_corrupted_file_is_treated_as_empty() {
    let dir = TestDir::new();
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(dir.path().join("cart.json"), "[{\"name\": \"Burger\",").unwrap();

    let mut ledger = dir.open_ledger();
    assert!(ledger.is_empty());

    // The next write replaces the corrupted content
    ledger.add_item("Burger", price(1000), "");
    let raw = ledger.store().get(CART_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["name"], "Burger");
    assert_eq!(value[0]["quantity"], 1);
}

#[test]
fn test_records_written_by_the_web_page_load() {
    let dir = TestDir::new();
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(
        dir.path().join("cart.json"),
        r#"[{"name":"Cheese Burguer","price":25.9,"imageSrc":"cheese.jpg","quantity":2}]"#,
    )
    .unwrap();

    let ledger = dir.open_ledger();
    assert_eq!(ledger.total_count(), 2);
    assert_eq!(ledger.compute_total(DeliveryMethod::Pickup), price(5180));
}
