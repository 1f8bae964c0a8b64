//! Cart store behaviour against in-memory storage.

mod common;

use common::*;
use shopcart::cart::{AddOutcome, QuantityChange, QuantityOutcome};
use shopcart::catalog::ProductId;
use shopcart::money::Money;
use shopcart::storage::KeyValueStore;

fn quantities(store: &shopcart::cart::CartStore) -> Vec<(u32, u32)> {
    store
        .cart()
        .lines()
        .iter()
        .map(|line| (line.id.0, line.quantity))
        .collect()
}

#[test]
fn repeated_adds_merge_into_one_line() {
    let (mut store, _) = memory_store();
    store.add(ProductId(1)).unwrap();
    store.add(ProductId(2)).unwrap();
    store.add(ProductId(1)).unwrap();

    assert_eq!(quantities(&store), vec![(1, 2), (2, 1)]);
    assert_eq!(store.item_count(), 3);
    assert_eq!(store.total(), Money::from_cents(39997));
}

#[test]
fn decrease_at_one_removes_the_line() {
    let (mut store, _) = memory_store();
    store.add(ProductId(1)).unwrap();
    store.add(ProductId(2)).unwrap();
    store.add(ProductId(1)).unwrap();

    let outcome = store
        .update_quantity(ProductId(2), QuantityChange::Decrease)
        .unwrap();
    assert_eq!(outcome, QuantityOutcome::Removed);
    assert_eq!(quantities(&store), vec![(1, 2)]);

    store.add(ProductId(5)).unwrap();
    assert_eq!(store.total(), Money::from_cents(22997));
    assert_eq!(store.item_count(), 3);
}

#[test]
fn increase_and_decrease_step_by_one() {
    let (mut store, _) = memory_store();
    store.add(ProductId(3)).unwrap();

    let up = store
        .update_quantity(ProductId(3), QuantityChange::Increase)
        .unwrap();
    assert_eq!(up, QuantityOutcome::Changed { quantity: 2 });

    let down = store
        .update_quantity(ProductId(3), QuantityChange::Decrease)
        .unwrap();
    assert_eq!(down, QuantityOutcome::Changed { quantity: 1 });
}

#[test]
fn unknown_ids_leave_cart_and_storage_untouched() {
    let (mut store, memory) = memory_store();
    store.add(ProductId(1)).unwrap();
    let writes = memory.writes();

    assert_eq!(store.add(ProductId(42)).unwrap(), AddOutcome::UnknownProduct);
    assert_eq!(
        store
            .update_quantity(ProductId(42), QuantityChange::Increase)
            .unwrap(),
        QuantityOutcome::NotInCart
    );
    assert!(!store.remove(ProductId(42)).unwrap());

    assert_eq!(memory.writes(), writes);
    assert_eq!(quantities(&store), vec![(1, 1)]);
}

#[test]
fn checkout_empties_cart_and_reports_totals() {
    let (mut store, memory) = memory_store();
    store.add(ProductId(1)).unwrap();
    store.add(ProductId(4)).unwrap();
    store.add(ProductId(4)).unwrap();

    let receipt = store.checkout().unwrap().expect("non-empty cart checks out");
    assert_eq!(receipt.total, Money::from_cents(19997));
    assert_eq!(receipt.item_count, 3);
    assert_eq!(receipt.lines.len(), 2);
    assert!(store.cart().is_empty());

    assert_eq!(memory.get("cart").unwrap().as_deref(), Some("[]"));
}

#[test]
fn checkout_of_empty_cart_is_a_no_op() {
    let (mut store, memory) = memory_store();
    assert!(store.checkout().unwrap().is_none());
    store.clear().unwrap();
    assert_eq!(memory.writes(), 0);
}

#[test]
fn reopened_store_restores_cart() {
    let (mut store, memory) = memory_store();
    store.add(ProductId(2)).unwrap();
    store.add(ProductId(5)).unwrap();
    store.add(ProductId(5)).unwrap();
    drop(store);

    let reopened = open_memory(&memory);
    assert_eq!(quantities(&reopened), vec![(2, 1), (5, 2)]);
    assert_eq!(reopened.total(), Money::from_cents(25997));
    let line = reopened.cart().line(ProductId(5)).unwrap();
    assert_eq!(line.title, "Ewe Language");
}
