#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::{MonthKey, Transaction};

fn march() -> MonthKey {
    MonthKey::new(2024, 3).unwrap()
}

fn store_with_work() -> (Store, i64) {
    let mut store = Store::new();
    let id = store.add_category("Work").unwrap();
    (store, id)
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_add_category_assigns_ids() {
    let mut store = Store::new();
    let a = store.add_category("Work").unwrap();
    let b = store.add_category("Sleep").unwrap();
    assert_ne!(a, b);
    assert_eq!(store.categories().len(), 2);
    assert!(store.category(a).unwrap().budgeted.is_empty());
}

#[test]
fn test_categories_keep_insertion_order() {
    let mut store = Store::new();
    for name in ["Work", "Sleep", "Exercise", "Reading"] {
        store.add_category(name).unwrap();
    }
    let names: Vec<&str> = store.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Work", "Sleep", "Exercise", "Reading"]);
}

#[test]
fn test_add_category_rejects_blank() {
    let mut store = Store::new();
    assert_eq!(store.add_category(""), Err(StoreError::EmptyCategoryName));
    assert_eq!(store.add_category("   "), Err(StoreError::EmptyCategoryName));
}

#[test]
fn test_add_category_rejects_duplicates_case_insensitive() {
    let (mut store, _) = store_with_work();
    assert_eq!(
        store.add_category("work"),
        Err(StoreError::DuplicateCategory("work".into()))
    );
    assert_eq!(store.categories().len(), 1);
}

#[test]
fn test_rename_category() {
    let (mut store, id) = store_with_work();
    store.rename_category(id, "Deep Work").unwrap();
    assert_eq!(store.category(id).unwrap().name, "Deep Work");
}

#[test]
fn test_rename_category_keeps_transactions_attached() {
    let (mut store, id) = store_with_work();
    store
        .add_transaction(Transaction::new("Standup".into(), id, 30, "2024-03-05".into()))
        .unwrap();
    store.rename_category(id, "Office").unwrap();
    assert_eq!(store.transactions()[0].category_id, id);
}

#[test]
fn test_rename_category_to_same_name_is_allowed() {
    let (mut store, id) = store_with_work();
    // Case change of its own name must not count as a duplicate
    store.rename_category(id, "WORK").unwrap();
    assert_eq!(store.category(id).unwrap().name, "WORK");
}

#[test]
fn test_rename_unknown_category() {
    let mut store = Store::new();
    assert_eq!(
        store.rename_category(42, "Nope"),
        Err(StoreError::UnknownCategory(42))
    );
}

// ── Budget edits ──────────────────────────────────────────────

#[test]
fn test_update_category_budget_inserts_entry() {
    let (mut store, id) = store_with_work();
    let stored = store.update_category_budget(id, march(), "6000").unwrap();
    assert_eq!(stored, 6000);
    assert_eq!(store.category(id).unwrap().assigned_for(march()), 6000);
}

#[test]
fn test_update_category_budget_overwrites() {
    let (mut store, id) = store_with_work();
    store.update_category_budget(id, march(), "6000").unwrap();
    store.update_category_budget(id, march(), "4500").unwrap();
    assert_eq!(store.category(id).unwrap().assigned_for(march()), 4500);
    assert_eq!(store.category(id).unwrap().budgeted.len(), 1);
}

#[test]
fn test_update_category_budget_is_idempotent() {
    let (mut store, id) = store_with_work();
    store.update_category_budget(id, march(), "6000").unwrap();
    store.update_category_budget(id, march(), "6000").unwrap();
    let cat = store.category(id).unwrap();
    assert_eq!(cat.assigned_for(march()), 6000);
    assert_eq!(cat.budgeted.len(), 1);
}

#[test]
fn test_update_category_budget_rejects_non_numeric() {
    let (mut store, id) = store_with_work();
    let err = store.update_category_budget(id, march(), "abc").unwrap_err();
    assert_eq!(err, StoreError::InvalidBudgetValue("abc".into()));
    // Rejected input must not leave a poisoned entry behind
    assert_eq!(store.category(id).unwrap().assigned_for(march()), 0);
    assert!(store.category(id).unwrap().budgeted.is_empty());
}

#[test]
fn test_update_category_budget_rejects_negative() {
    let (mut store, id) = store_with_work();
    let err = store.update_category_budget(id, march(), "-5").unwrap_err();
    assert_eq!(err, StoreError::InvalidBudgetValue("-5".into()));
    assert!(store.category(id).unwrap().budgeted.is_empty());
}

#[test]
fn test_update_category_budget_trims_whitespace() {
    let (mut store, id) = store_with_work();
    store.update_category_budget(id, march(), " 120 ").unwrap();
    assert_eq!(store.category(id).unwrap().assigned_for(march()), 120);
}

#[test]
fn test_update_category_budget_unknown_category() {
    let mut store = Store::new();
    assert_eq!(
        store.update_category_budget(9, march(), "100"),
        Err(StoreError::UnknownCategory(9))
    );
}

#[test]
fn test_budget_entries_are_per_month() {
    let (mut store, id) = store_with_work();
    store.update_category_budget(id, march(), "6000").unwrap();
    store.update_category_budget(id, march().next(), "3000").unwrap();
    let cat = store.category(id).unwrap();
    assert_eq!(cat.assigned_for(march()), 6000);
    assert_eq!(cat.assigned_for(march().next()), 3000);
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_add_transaction_assigns_id() {
    let (mut store, cat) = store_with_work();
    let id = store
        .add_transaction(Transaction::new("Standup".into(), cat, 30, "2024-03-05".into()))
        .unwrap();
    assert_eq!(store.transaction(id).unwrap().description, "Standup");
}

#[test]
fn test_add_transaction_rejects_unknown_category() {
    let mut store = Store::new();
    let err = store
        .add_transaction(Transaction::new("Standup".into(), 42, 30, "2024-03-05".into()))
        .unwrap_err();
    assert_eq!(err, StoreError::UnknownCategory(42));
    assert!(store.transactions().is_empty());
}

#[test]
fn test_transactions_keep_insertion_order() {
    let (mut store, cat) = store_with_work();
    for desc in ["a", "b", "c"] {
        store
            .add_transaction(Transaction::new(desc.into(), cat, 10, "2024-03-05".into()))
            .unwrap();
    }
    let descs: Vec<&str> = store
        .transactions()
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(descs, vec!["a", "b", "c"]);
}

#[test]
fn test_update_transaction_replaces_in_place() {
    let (mut store, cat) = store_with_work();
    let id = store
        .add_transaction(Transaction::new("Standup".into(), cat, 30, "2024-03-05".into()))
        .unwrap();
    let mut edited = store.transaction(id).unwrap().clone();
    edited.description = "Planning".into();
    edited.duration_minutes = 45;
    store.update_transaction(edited).unwrap();
    let stored = store.transaction(id).unwrap();
    assert_eq!(stored.description, "Planning");
    assert_eq!(stored.duration_minutes, 45);
    assert_eq!(store.transactions().len(), 1);
}

#[test]
fn test_update_transaction_unknown_id() {
    let (mut store, cat) = store_with_work();
    let mut ghost = Transaction::new("Ghost".into(), cat, 10, "2024-03-05".into());
    ghost.id = Some(99);
    assert_eq!(
        store.update_transaction(ghost),
        Err(StoreError::UnknownTransaction(99))
    );
}

#[test]
fn test_update_transaction_rejects_unknown_category() {
    let (mut store, cat) = store_with_work();
    let id = store
        .add_transaction(Transaction::new("Standup".into(), cat, 30, "2024-03-05".into()))
        .unwrap();
    let mut edited = store.transaction(id).unwrap().clone();
    edited.category_id = 42;
    assert_eq!(
        store.update_transaction(edited),
        Err(StoreError::UnknownCategory(42))
    );
}

#[test]
fn test_delete_transaction() {
    let (mut store, cat) = store_with_work();
    let id = store
        .add_transaction(Transaction::new("Standup".into(), cat, 30, "2024-03-05".into()))
        .unwrap();
    store.delete_transaction(id).unwrap();
    assert!(store.transactions().is_empty());
    assert_eq!(
        store.delete_transaction(id),
        Err(StoreError::UnknownTransaction(id))
    );
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let (mut store, cat) = store_with_work();
    let first = store
        .add_transaction(Transaction::new("a".into(), cat, 10, "2024-03-05".into()))
        .unwrap();
    store.delete_transaction(first).unwrap();
    let second = store
        .add_transaction(Transaction::new("b".into(), cat, 10, "2024-03-05".into()))
        .unwrap();
    assert_ne!(first, second);
}
