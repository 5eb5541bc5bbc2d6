//! Integration tests for owner lifetime
//!
//! Tests that deleting an owner's last variable or dropping the owner
//! leaves nothing behind, and that allocation restarts afterwards.

use pvars_foundation::{OwnerId, VarType};
use pvars_storage::VarStore;

const OWNER: OwnerId = OwnerId(3);

fn assert_no_residue(store: &VarStore, owner: OwnerId, names: &[&str]) {
    for name in names {
        assert_eq!(store.type_of(owner, name), VarType::None);
    }
    assert_eq!(store.upper_index_bound(owner), 0);
    assert!(!store.contains_owner(owner));
    assert_eq!(store.high_water_mark(owner), None);
    assert_eq!(store.free_count(owner), 0);
    assert!(store.is_consistent());
}

#[test]
fn deleting_last_variable_purges_owner() {
    let mut store = VarStore::new();
    store.set_int(OWNER, "a", 1);
    store.set_int(OWNER, "b", 2);

    store.delete(OWNER, "a");
    store.delete(OWNER, "b");

    assert_no_residue(&store, OWNER, &["a", "b"]);
}

#[test]
fn allocation_restarts_after_purge() {
    let mut store = VarStore::new();
    store.set_int(OWNER, "a", 1);
    store.set_int(OWNER, "b", 2);
    store.delete(OWNER, "b");
    store.delete(OWNER, "a");

    assert_eq!(store.set_int(OWNER, "c", 3), 0);
    assert_eq!(store.set_int(OWNER, "d", 4), 1);
}

#[test]
fn drop_owner_removes_everything() {
    let mut store = VarStore::new();
    store.set_int(OWNER, "a", 1);
    store.set_float(OWNER, "b", 2.0);
    store.set_string(OWNER, "c", "3");
    store.delete(OWNER, "b");

    assert_eq!(store.drop_owner(OWNER), 2);
    assert_no_residue(&store, OWNER, &["a", "b", "c"]);
}

#[test]
fn drop_owner_is_idempotent_and_isolated() {
    let mut store = VarStore::new();
    store.set_int(OwnerId(1), "a", 1);
    store.set_int(OwnerId(2), "a", 2);

    assert_eq!(store.drop_owner(OwnerId(1)), 1);
    assert_eq!(store.drop_owner(OwnerId(1)), 0);
    assert_eq!(store.drop_owner(OwnerId(42)), 0);

    assert_eq!(store.get_int(OwnerId(2), "a"), Some(2));
    assert_eq!(store.owners().collect::<Vec<_>>(), vec![OwnerId(2)]);
}

#[test]
fn deleting_missing_variable_changes_nothing() {
    let mut store = VarStore::new();
    store.set_int(OWNER, "a", 1);

    assert_eq!(store.delete(OWNER, "zzz"), None);
    assert_eq!(store.delete(OwnerId(9), "a"), None);
    assert_eq!(store.free_count(OWNER), 0);
    assert_eq!(store.len(OWNER), 1);
    assert!(!store.contains_owner(OwnerId(9)));
}
