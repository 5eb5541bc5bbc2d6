//! Per-owner index allocation with FIFO reuse.
//!
//! The `IndexAllocator` hands out small integer indices per owner so that
//! variables can be enumerated by position. Indices returned by deletions go
//! onto a free list and are reused oldest-first before the high-water mark
//! advances.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use pvars_foundation::OwnerId;

/// Allocation bookkeeping for a single owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct AllocState {
    /// Highest index ever issued. Never decreases.
    high_water: u32,
    /// Released indices, oldest first.
    free_list: VecDeque<u32>,
}

/// Manages index allocation for every owner.
///
/// Holds bookkeeping only; the variables themselves live in
/// [`VariableTable`](crate::VariableTable).
#[derive(Debug, Clone, Default)]
pub struct IndexAllocator {
    owners: HashMap<OwnerId, AllocState>,
}

impl IndexAllocator {
    /// Creates an allocator with no owners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an index for `owner`.
    ///
    /// The first allocation for an owner creates its state and returns 0.
    /// Later allocations reuse the oldest released index, or advance the
    /// high-water mark when nothing has been released. The mark stops at
    /// `u32::MAX`.
    pub fn allocate(&mut self, owner: OwnerId) -> u32 {
        match self.owners.entry(owner) {
            Entry::Occupied(mut entry) => {
                let state = entry.get_mut();
                if let Some(index) = state.free_list.pop_front() {
                    index
                } else {
                    state.high_water = state.high_water.saturating_add(1);
                    state.high_water
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(AllocState::default());
                0
            }
        }
    }

    /// Returns `index` to the owner's free list.
    ///
    /// The index is not validated. Releasing for an owner with no state
    /// does nothing.
    pub fn release(&mut self, owner: OwnerId, index: u32) {
        if let Some(state) = self.owners.get_mut(&owner) {
            state.free_list.push_back(index);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_high_water(&mut self, owner: OwnerId, mark: u32) {
        self.owners.entry(owner).or_default().high_water = mark;
    }

    /// Drops all allocation state for `owner`.
    ///
    /// Returns true if the owner had state.
    pub fn purge(&mut self, owner: OwnerId) -> bool {
        self.owners.remove(&owner).is_some()
    }

    /// Returns true if `owner` has allocation state.
    #[must_use]
    pub fn contains(&self, owner: OwnerId) -> bool {
        self.owners.contains_key(&owner)
    }

    /// Returns the owner's high-water mark, if it has state.
    #[must_use]
    pub fn high_water_mark(&self, owner: OwnerId) -> Option<u32> {
        self.owners.get(&owner).map(|s| s.high_water)
    }

    /// Returns how many released indices are waiting for reuse.
    #[must_use]
    pub fn free_count(&self, owner: OwnerId) -> usize {
        self.owners.get(&owner).map_or(0, |s| s.free_list.len())
    }

    /// Returns the high-water mark when the owner has state and an empty
    /// free list, `None` otherwise.
    ///
    /// This is the fast path of the upper-bound query; any pending reuse
    /// forces callers to scan instead.
    #[must_use]
    pub fn settled_high_water(&self, owner: OwnerId) -> Option<u32> {
        self.owners
            .get(&owner)
            .filter(|s| s.free_list.is_empty())
            .map(|s| s.high_water)
    }

    /// Returns the number of owners with allocation state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Returns true if no owner has allocation state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
