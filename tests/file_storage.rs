//! JSON file key-value store and cart persistence across restarts.

mod common;

use common::*;
use shopcart::catalog::ProductId;
use shopcart::storage::{JsonFileStore, KeyValueCartStorage, KeyValueStore, StorageError};
use std::fs;

#[test]
fn missing_file_reads_as_empty() {
    let (_dir, path) = temp_storage();
    let store = JsonFileStore::new(&path);
    assert_eq!(store.get("cart").unwrap(), None);
}

#[test]
fn set_get_remove_round_trip_through_disk() {
    let (_dir, path) = temp_storage();
    let store = JsonFileStore::new(&path);
    store.set("cart", "[]").unwrap();
    store.set("other", "kept").unwrap();

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.get("cart").unwrap().as_deref(), Some("[]"));

    reopened.remove("cart").unwrap();
    reopened.remove("cart").unwrap();
    assert_eq!(store.get("cart").unwrap(), None);
    assert_eq!(store.get("other").unwrap().as_deref(), Some("kept"));
}

#[test]
fn no_temp_file_left_behind() {
    let (dir, path) = temp_storage();
    JsonFileStore::new(&path).set("cart", "[]").unwrap();
    assert!(path.exists());
    assert!(!dir.path().join("storage.json.tmp").exists());
}

#[test]
fn creates_missing_parent_directories() {
    let (dir, _) = temp_storage();
    let nested = dir.path().join("a").join("b").join("storage.json");
    JsonFileStore::new(&nested).set("cart", "[]").unwrap();
    assert!(nested.exists());
}

#[test]
fn cart_survives_restart() {
    let (_dir, path) = temp_storage();
    {
        let mut store = open_file(&path);
        store.add(ProductId(1)).unwrap();
        store.add(ProductId(1)).unwrap();
        store.add(ProductId(3)).unwrap();
    }

    let store = open_file(&path);
    let lines: Vec<(u32, u32)> = store
        .cart()
        .lines()
        .iter()
        .map(|line| (line.id.0, line.quantity))
        .collect();
    assert_eq!(lines, vec![(1, 2), (3, 1)]);
}

#[test]
fn checkout_persists_empty_cart() {
    let (_dir, path) = temp_storage();
    let mut store = open_file(&path);
    store.add(ProductId(2)).unwrap();
    store.checkout().unwrap();
    drop(store);

    assert!(open_file(&path).cart().is_empty());
    let raw = JsonFileStore::new(&path).get("cart").unwrap();
    assert_eq!(raw.as_deref(), Some("[]"));
}

#[test]
fn unreadable_document_is_reported_as_corrupt() {
    let (_dir, path) = temp_storage();
    fs::write(&path, "not json at all").unwrap();

    let err = JsonFileStore::new(&path).get("cart").unwrap_err();
    assert!(matches!(err, StorageError::Document { .. }));
    assert!(err.is_corrupt());
}

#[test]
fn custom_key_isolates_carts() {
    let (_dir, path) = temp_storage();
    let storage = KeyValueCartStorage::with_key(JsonFileStore::new(&path), "guest");
    assert_eq!(storage.key(), "guest");

    let mut store = shopcart::cart::CartStore::open(
        shopcart::catalog::Catalog::builtin(),
        Box::new(storage),
    )
    .unwrap();
    store.add(ProductId(4)).unwrap();

    assert!(open_file(&path).cart().is_empty());
}
