//! Integration tests for index allocation and enumeration
//!
//! Tests first-index assignment, FIFO reuse of deleted indices, the
//! upper-index bound, and name lookup by index.

use std::collections::HashSet;

use pvars_foundation::OwnerId;
use pvars_storage::VarStore;

const OWNER: OwnerId = OwnerId(5);

fn enumerate(store: &VarStore, owner: OwnerId) -> Vec<(u32, String)> {
    (0..store.upper_index_bound(owner))
        .filter_map(|i| store.name_at_index(owner, i).map(|n| (i, n.to_string())))
        .collect()
}

// =============================================================================
// Allocation
// =============================================================================

#[test]
fn indices_are_dense_from_zero() {
    let mut store = VarStore::new();

    assert_eq!(store.set_int(OWNER, "a", 1), 0);
    assert_eq!(store.set_int(OWNER, "b", 1), 1);
    assert_eq!(store.set_int(OWNER, "c", 1), 2);
}

#[test]
fn live_indices_are_unique() {
    let mut store = VarStore::new();
    for i in 0..20 {
        store.set_int(OWNER, &format!("v{i}"), i);
    }
    for i in (0..20).step_by(3) {
        store.delete(OWNER, &format!("v{i}"));
    }
    for i in 20..30 {
        store.set_int(OWNER, &format!("v{i}"), i);
    }

    let indices: Vec<u32> = store.variables(OWNER).map(|(_, v)| v.index).collect();
    let unique: HashSet<_> = indices.iter().copied().collect();
    assert_eq!(indices.len(), unique.len());
    assert!(store.is_consistent());
}

// =============================================================================
// Reuse
// =============================================================================

#[test]
fn deleted_indices_are_reused_in_deletion_order() {
    let mut store = VarStore::new();
    for name in ["a", "b", "c", "d"] {
        store.set_int(OWNER, name, 0);
    }

    store.delete(OWNER, "c");
    store.delete(OWNER, "a");

    assert_eq!(store.set_int(OWNER, "e", 0), 2);
    assert_eq!(store.set_int(OWNER, "f", 0), 0);
    assert_eq!(store.set_int(OWNER, "g", 0), 4);
}

#[test]
fn walkthrough() {
    let mut store = VarStore::new();

    assert_eq!(store.set_int(OWNER, "score", 10), 0);
    assert_eq!(store.set_int(OWNER, "score", 20), 0);
    assert_eq!(store.get_int(OWNER, "score"), Some(20));

    assert_eq!(store.set_string(OWNER, "name", "Bob"), 1);
    assert_eq!(store.delete(OWNER, "score"), Some(0));
    assert_eq!(store.set_float(OWNER, "ratio", 1.5), 0);

    assert_eq!(store.name_at_index(OWNER, 0), Some("ratio"));
    assert_eq!(store.name_at_index(OWNER, 1), Some("name"));
}

// =============================================================================
// Upper Bound
// =============================================================================

#[test]
fn bound_without_holes_is_high_water_plus_one() {
    let mut store = VarStore::new();
    assert_eq!(store.upper_index_bound(OWNER), 0);

    for name in ["a", "b", "c"] {
        store.set_int(OWNER, name, 0);
    }
    assert_eq!(store.upper_index_bound(OWNER), 3);
}

#[test]
fn bound_with_holes_scans_live_indices() {
    let mut store = VarStore::new();
    for name in ["a", "b", "c"] {
        store.set_int(OWNER, name, 0);
    }

    store.delete(OWNER, "b");
    assert_eq!(store.upper_index_bound(OWNER), 3);

    store.delete(OWNER, "c");
    assert_eq!(store.upper_index_bound(OWNER), 1);
}

#[test]
fn enumeration_skips_holes() {
    let mut store = VarStore::new();
    for name in ["a", "b", "c"] {
        store.set_int(OWNER, name, 0);
    }
    store.delete(OWNER, "b");

    assert_eq!(
        enumerate(&store, OWNER),
        vec![(0, "a".to_string()), (2, "c".to_string())]
    );
    assert_eq!(store.name_at_index(OWNER, 1), None);
    assert_eq!(store.name_at_index(OWNER, 99), None);
}
