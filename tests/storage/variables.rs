//! Integration tests for typed variables
//!
//! Tests set/get per kind, kind isolation, case-insensitive names, and
//! in-place updates.

use pvars_foundation::{OwnerId, Value, VarType};
use pvars_storage::VarStore;

const OWNER: OwnerId = OwnerId(1);

// =============================================================================
// Set and Get
// =============================================================================

#[test]
fn set_and_get_each_kind() {
    let mut store = VarStore::new();
    store.set_int(OWNER, "hp", 100);
    store.set_float(OWNER, "speed", 2.5);
    store.set_string(OWNER, "title", "Sir");

    assert_eq!(store.get_int(OWNER, "hp"), Some(100));
    assert_eq!(store.get_float(OWNER, "speed"), Some(2.5));
    assert_eq!(store.get_string(OWNER, "title"), Some("Sir"));
}

#[test]
fn names_are_case_insensitive() {
    let mut store = VarStore::new();
    store.set_int(OWNER, "Health", 100);

    assert_eq!(store.get_int(OWNER, "health"), Some(100));
    assert_eq!(store.get_int(OWNER, "HEALTH"), Some(100));
    assert_eq!(store.name_at_index(OWNER, 0), Some("health"));
}

#[test]
fn owners_do_not_share_names() {
    let mut store = VarStore::new();
    store.set_int(OwnerId(1), "score", 1);
    store.set_int(OwnerId(2), "score", 2);

    assert_eq!(store.get_int(OwnerId(1), "score"), Some(1));
    assert_eq!(store.get_int(OwnerId(2), "score"), Some(2));
}

// =============================================================================
// Kind Isolation
// =============================================================================

#[test]
fn reads_of_the_wrong_kind_are_absent() {
    let mut store = VarStore::new();
    store.set_float(OWNER, "f", 1.0);
    store.set_string(OWNER, "s", "1");
    store.set_int(OWNER, "i", 1);

    assert_eq!(store.get_int(OWNER, "f"), None);
    assert_eq!(store.get_int(OWNER, "s"), None);
    assert_eq!(store.get_float(OWNER, "i"), None);
    assert_eq!(store.get_string(OWNER, "i"), None);
}

#[test]
fn type_of_reports_last_write() {
    let mut store = VarStore::new();
    assert_eq!(store.type_of(OWNER, "x"), VarType::None);

    store.set_int(OWNER, "x", 1);
    assert_eq!(store.type_of(OWNER, "x"), VarType::Int);

    store.set_string(OWNER, "x", "one");
    assert_eq!(store.type_of(OWNER, "x"), VarType::String);

    store.set_float(OWNER, "x", 1.0);
    assert_eq!(store.type_of(OWNER, "x"), VarType::Float);
}

// =============================================================================
// Updates
// =============================================================================

#[test]
fn update_keeps_index_across_kinds() {
    let mut store = VarStore::new();
    store.set_int(OWNER, "a", 1);
    let index = store.set_int(OWNER, "b", 2);

    assert_eq!(store.set_string(OWNER, "B", "two"), index);
    assert_eq!(store.set_float(OWNER, "b", 2.0), index);
    assert_eq!(store.get(OWNER, "b"), Some(&Value::Float(2.0)));
    assert_eq!(store.len(OWNER), 2);
}

#[test]
fn failed_lookups_do_not_create_owners() {
    let store = VarStore::new();

    assert_eq!(store.get_int(OWNER, "x"), None);
    assert_eq!(store.type_of(OWNER, "x"), VarType::None);
    assert!(!store.contains_owner(OWNER));
    assert!(store.is_empty());
}
