//! Inventory Tests
//!
//! Tests for the CRUD contract of the in-memory record store.

use stockroom::{FieldEdit, Inventory, Record, StockError};

fn record(id: u32, brand: &str, category: &str, price: f64, quantity: i64) -> Record {
    Record {
        id,
        brand: brand.to_string(),
        category: category.to_string(),
        price,
        quantity,
    }
}

fn seeded() -> Inventory {
    let mut inventory = Inventory::new();
    inventory.add(record(1, "Acme", "Hammer", 9.99, 10)).unwrap();
    inventory.add(record(2, "Zeta", "Drill", 15.0, 2)).unwrap();
    inventory
        .add(record(3, "Fender", "Stratocaster", 799.5, 1))
        .unwrap();
    inventory
}

// =============================================================================
// Add / Find Tests
// =============================================================================

#[test]
fn test_add_then_find() {
    let mut inventory = Inventory::new();
    inventory.add(record(7, "Moog", "Synth", 1250.0, 1)).unwrap();

    assert_eq!(inventory.len(), 1);
    let found = inventory.find(7).unwrap();
    assert_eq!(found.brand, "Moog");
    assert_eq!(found.quantity, 1);
}

#[test]
fn test_add_duplicate_id_rejected() {
    let mut inventory = seeded();
    let before: Vec<Record> = inventory.records().to_vec();

    let result = inventory.add(record(1, "Knockoff", "Hammer", 1.0, 5));
    assert!(matches!(result, Err(StockError::DuplicateId(1))));

    // Store unchanged: same size, same records
    assert_eq!(inventory.records(), before.as_slice());
}

#[test]
fn test_find_missing() {
    let inventory = seeded();
    assert!(inventory.find(99).is_none());
    assert!(!inventory.contains(99));
}

// =============================================================================
// Edit Tests
// =============================================================================

#[test]
fn test_edit_each_field() {
    let mut inventory = seeded();

    inventory.edit(1, FieldEdit::Brand("Apex".into())).unwrap();
    inventory
        .edit(1, FieldEdit::Category("Mallet".into()))
        .unwrap();
    inventory.edit(1, FieldEdit::Price(12.5)).unwrap();
    inventory.edit(1, FieldEdit::Quantity(4)).unwrap();

    let record = inventory.find(1).unwrap();
    assert_eq!(record.brand, "Apex");
    assert_eq!(record.category, "Mallet");
    assert_eq!(record.price, 12.5);
    assert_eq!(record.quantity, 4);
}

#[test]
fn test_edit_changes_exactly_one_field() {
    let mut inventory = seeded();
    inventory.edit(2, FieldEdit::Price(20.0)).unwrap();

    let record = inventory.find(2).unwrap();
    assert_eq!(record.brand, "Zeta");
    assert_eq!(record.category, "Drill");
    assert_eq!(record.price, 20.0);
    assert_eq!(record.quantity, 2);
}

#[test]
fn test_edit_returns_updated_record() {
    let mut inventory = seeded();
    let updated = inventory.edit(3, FieldEdit::Quantity(0)).unwrap();
    assert_eq!(updated.id, 3);
    assert_eq!(updated.quantity, 0);
}

#[test]
fn test_edit_missing_id() {
    let mut inventory = seeded();
    let result = inventory.edit(99, FieldEdit::Price(1.0));
    assert!(matches!(result, Err(StockError::NotFound(99))));
}

// =============================================================================
// Remove Tests
// =============================================================================

#[test]
fn test_remove_then_find() {
    let mut inventory = seeded();
    let size = inventory.len();

    let removed = inventory.remove(2).unwrap();
    assert_eq!(removed.id, 2);
    assert!(inventory.find(2).is_none());
    assert_eq!(inventory.len(), size - 1);
}

#[test]
fn test_remove_missing_id() {
    let mut inventory = seeded();
    assert!(matches!(inventory.remove(99), Err(StockError::NotFound(99))));
    assert_eq!(inventory.len(), 3);
}

// =============================================================================
// Decrement Tests
// =============================================================================

#[test]
fn test_decrement_single() {
    let mut inventory = seeded();
    inventory.decrement(&[1]).unwrap();
    assert_eq!(inventory.find(1).unwrap().quantity, 9);
}

#[test]
fn test_decrement_each_selected_once() {
    let mut inventory = seeded();
    inventory.decrement(&[1, 3]).unwrap();

    assert_eq!(inventory.find(1).unwrap().quantity, 9);
    assert_eq!(inventory.find(2).unwrap().quantity, 2); // not selected
    assert_eq!(inventory.find(3).unwrap().quantity, 0);
}

#[test]
fn test_decrement_order_independent() {
    let mut forward = seeded();
    let mut backward = seeded();

    forward.decrement(&[1, 2, 3]).unwrap();
    backward.decrement(&[3, 2, 1]).unwrap();

    assert_eq!(forward.records(), backward.records());
}

#[test]
fn test_decrement_may_drive_quantity_below_zero() {
    // There is no stock-sufficiency check: selling a sold-out record
    // goes negative
    let mut inventory = Inventory::new();
    inventory.add(record(1, "Acme", "Hammer", 9.99, 0)).unwrap();

    inventory.decrement(&[1]).unwrap();
    assert_eq!(inventory.find(1).unwrap().quantity, -1);
}

#[test]
fn test_decrement_unknown_id() {
    let mut inventory = seeded();
    let result = inventory.decrement(&[99]);
    assert!(matches!(result, Err(StockError::NotFound(99))));
}

// =============================================================================
// Ordering / Display Tests
// =============================================================================

#[test]
fn test_insertion_order_preserved() {
    let inventory = seeded();
    let ids: Vec<u32> = inventory.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_display_format() {
    let r = record(1, "Fender", "Stratocaster", 799.5, 3);
    assert_eq!(
        r.to_string(),
        "Fender Stratocaster, price: 799.5, quantity: 3"
    );
}
