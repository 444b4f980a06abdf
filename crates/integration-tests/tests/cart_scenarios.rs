//! Integration tests for cart flows across session reloads.
//!
//! Each test drives a `CartStore` backed by real file storage in a temporary
//! directory, then reopens it the way a new page load would.

use aavakaaram_cart::{CartConfig, CartStorage, CartStore, FileStorage, MemoryStorage};
use aavakaaram_core::{OrderStatus, Price, ProductId, UserId};
use aavakaaram_integration_tests::{lemon_pickle, mango_pickle};

fn file_storage(dir: &tempfile::TempDir) -> FileStorage {
    let config = CartConfig {
        storage_dir: dir.path().to_path_buf(),
        ..CartConfig::default()
    };
    config.file_storage()
}

fn lines(store: &CartStore<impl CartStorage>) -> Vec<(String, u32)> {
    store
        .lines()
        .iter()
        .map(|line| (line.product_id().to_string(), line.quantity()))
        .collect()
}

// =============================================================================
// Aggregation Scenarios
// =============================================================================

#[test]
fn test_add_merge_scenario() {
    let mut store = CartStore::open(MemoryStorage::new());

    store.add_item(mango_pickle(), 2);
    store.add_item(lemon_pickle(), 1);
    store.add_item(mango_pickle(), 1);

    assert_eq!(
        lines(&store),
        vec![("A".to_string(), 3), ("B".to_string(), 1)]
    );
    assert_eq!(store.total(), Price::whole(1330));
    assert_eq!(store.item_count(), 4);
}

#[test]
fn test_update_to_zero_scenario() {
    let mut store = CartStore::open(MemoryStorage::new());
    store.add_item(mango_pickle(), 2);
    store.add_item(lemon_pickle(), 1);
    store.add_item(mango_pickle(), 1);

    store.update_quantity(&ProductId::new("A"), 0);

    assert_eq!(lines(&store), vec![("B".to_string(), 1)]);
    assert_eq!(store.total(), Price::whole(280));
    assert_eq!(store.item_count(), 1);
}

#[test]
fn test_clear_then_totals_are_zero() {
    let mut store = CartStore::open(MemoryStorage::new());
    store.add_item(mango_pickle(), 5);
    store.clear_cart();

    assert!(store.lines().is_empty());
    assert_eq!(store.total(), Price::ZERO);
    assert_eq!(store.item_count(), 0);
}

// =============================================================================
// Reload Scenarios
// =============================================================================

#[test]
fn test_reload_from_file_preserves_lines() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut store = CartStore::open(file_storage(&dir));
    store.add_item(lemon_pickle(), 2);
    store.add_item(mango_pickle(), 1);
    store.update_quantity(&ProductId::new("B"), 4);
    let before = store.cart().clone();
    drop(store);

    let reloaded = CartStore::open(file_storage(&dir));
    assert_eq!(reloaded.cart(), &before);
    assert_eq!(
        lines(&reloaded),
        vec![("B".to_string(), 4), ("A".to_string(), 1)]
    );

    let line = reloaded
        .cart()
        .get(&ProductId::new("A"))
        .expect("mango line");
    assert_eq!(line.product_name(), "Mango Pickle");
    assert_eq!(line.image(), "/images/mango-pickle.jpg");
    assert_eq!(line.unit_price(), Price::whole(350));
}

#[test]
fn test_reload_after_clear_is_empty() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut store = CartStore::open(file_storage(&dir));
    store.add_item(mango_pickle(), 1);
    store.clear_cart();
    drop(store);

    assert!(CartStore::open(file_storage(&dir)).cart().is_empty());
}

#[test]
fn test_corrupt_file_starts_empty_and_recovers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = file_storage(&dir);
    std::fs::write(storage.path(), "{\"state\": [oops").expect("write corrupt blob");

    let mut store = CartStore::open(storage);
    assert!(store.cart().is_empty());

    store.add_item(lemon_pickle(), 1);
    drop(store);

    let reloaded = CartStore::open(file_storage(&dir));
    assert_eq!(lines(&reloaded), vec![("B".to_string(), 1)]);
}

#[test]
fn test_stored_blob_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = file_storage(&dir);

    let mut store = CartStore::open(storage.clone());
    store.add_item(mango_pickle(), 2);

    let blob = std::fs::read_to_string(storage.path()).expect("blob written");
    let value: serde_json::Value = serde_json::from_str(&blob).expect("valid json");
    assert_eq!(value["version"], 0);
    assert_eq!(value["state"]["items"][0]["productId"], "A");
    assert_eq!(value["state"]["items"][0]["price"], "350");
    assert_eq!(value["state"]["items"][0]["quantity"], 2);
    assert!(storage.path().ends_with("aavakaaram-cart.json"));
}

// =============================================================================
// Checkout Hand-off
// =============================================================================

#[test]
fn test_checkout_draft_from_restored_cart() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut store = CartStore::open(file_storage(&dir));
    store.add_item(mango_pickle(), 3);
    store.add_item(lemon_pickle(), 1);
    drop(store);

    let mut store = CartStore::open(file_storage(&dir));
    let draft = store
        .checkout_draft(UserId::new("customer-1"))
        .expect("non-empty cart");

    assert_eq!(draft.status, OrderStatus::Pending);
    assert_eq!(draft.total_amount, Price::whole(1330));
    assert_eq!(
        draft
            .items
            .iter()
            .map(|item| (item.product_id.as_str(), item.quantity))
            .collect::<Vec<_>>(),
        vec![("A", 3), ("B", 1)]
    );

    store.clear_cart();
    assert!(store.checkout_draft(UserId::new("customer-1")).is_none());
}

#[test]
fn test_discounted_price_is_frozen_at_add() {
    let mut store = CartStore::open(MemoryStorage::new());
    let mut item = mango_pickle();
    item.unit_price = item.unit_price.discounted(10);
    store.add_item(item, 2);

    // A later add at full price does not re-price the line.
    store.add_item(mango_pickle(), 1);

    assert_eq!(store.item_count(), 3);
    assert_eq!(store.total(), Price::whole(315).times(3));
}
