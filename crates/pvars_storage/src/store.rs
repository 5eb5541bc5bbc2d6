//! The unified variable store.
//!
//! `VarStore` owns both the [`VariableTable`] and the [`IndexAllocator`] and is
//! the only way to mutate either, so the two always agree on which owners
//! exist: an owner has allocation state exactly when it has variables.

use pvars_foundation::{OwnerId, VarName, VarType, Value};
use tracing::debug;

use crate::allocator::IndexAllocator;
use crate::table::{Variable, VariableTable};

/// Per-owner typed variable store.
///
/// Names are case-normalized on the way in. Reads never fail; absence is
/// `None` (or [`VarType::None`]).
#[derive(Clone, Debug, Default)]
pub struct VarStore {
    /// Variable data.
    variables: VariableTable,
    /// Index bookkeeping.
    indices: IndexAllocator,
}

impl VarStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mutation ---

    /// Sets a variable, creating it if needed.
    ///
    /// An existing variable keeps its index even if the value's kind changes.
    /// Returns the variable's index.
    pub fn set(&mut self, owner: OwnerId, name: &str, value: impl Into<Value>) -> u32 {
        let name = VarName::new(name);
        let value = value.into();

        if let Some(var) = self.variables.get_mut(owner, &name) {
            var.value = value;
            return var.index;
        }

        let index = self.indices.allocate(owner);
        self.variables.insert(owner, name, index, value);
        index
    }

    /// Sets an integer variable.
    pub fn set_int(&mut self, owner: OwnerId, name: &str, value: i32) -> u32 {
        self.set(owner, name, value)
    }

    /// Sets a float variable.
    pub fn set_float(&mut self, owner: OwnerId, name: &str, value: f32) -> u32 {
        self.set(owner, name, value)
    }

    /// Sets a string variable.
    pub fn set_string(&mut self, owner: OwnerId, name: &str, value: &str) -> u32 {
        self.set(owner, name, value)
    }

    /// Deletes a variable, returning the index it held.
    ///
    /// The index goes back to the owner's free list. Deleting the owner's
    /// last variable purges the owner entirely.
    pub fn delete(&mut self, owner: OwnerId, name: &str) -> Option<u32> {
        let removal = self.variables.remove(owner, &VarName::new(name))?;

        if removal.owner_emptied {
            self.indices.purge(owner);
            debug!(%owner, "last variable deleted, owner purged");
        } else {
            self.indices.release(owner, removal.index);
        }

        Some(removal.index)
    }

    /// Discards every variable and all allocation state of an owner.
    ///
    /// Idempotent. Returns how many variables were dropped.
    pub fn drop_owner(&mut self, owner: OwnerId) -> usize {
        let dropped = self.variables.remove_owner(owner);
        self.indices.purge(owner);
        if dropped > 0 {
            debug!(%owner, dropped, "owner dropped");
        }
        dropped
    }

    // --- Lookup ---

    /// Gets a variable's value regardless of kind.
    #[must_use]
    pub fn get(&self, owner: OwnerId, name: &str) -> Option<&Value> {
        self.variable(owner, name).map(|var| &var.value)
    }

    /// Gets an integer variable. `None` if absent or not an integer.
    #[must_use]
    pub fn get_int(&self, owner: OwnerId, name: &str) -> Option<i32> {
        self.get(owner, name)?.as_int()
    }

    /// Gets a float variable. `None` if absent or not a float.
    #[must_use]
    pub fn get_float(&self, owner: OwnerId, name: &str) -> Option<f32> {
        self.get(owner, name)?.as_float()
    }

    /// Gets a string variable. `None` if absent or not a string.
    #[must_use]
    pub fn get_string(&self, owner: OwnerId, name: &str) -> Option<&str> {
        self.get(owner, name)?.as_str()
    }

    /// Returns the declared type of a variable.
    #[must_use]
    pub fn type_of(&self, owner: OwnerId, name: &str) -> VarType {
        self.variables.type_of(owner, &VarName::new(name))
    }

    /// Returns the index a variable currently holds.
    #[must_use]
    pub fn index_of(&self, owner: OwnerId, name: &str) -> Option<u32> {
        self.variable(owner, name).map(|var| var.index)
    }

    // --- Enumeration ---

    /// Returns the name of the variable at `index`.
    #[must_use]
    pub fn name_at_index(&self, owner: OwnerId, index: u32) -> Option<&str> {
        self.variables
            .name_at_index(owner, index)
            .map(VarName::as_str)
    }

    /// Returns an exclusive upper bound for enumerating an owner's indices.
    ///
    /// With an empty free list this is `high_water + 1`. Once any index is
    /// waiting for reuse (or the owner has no allocation state) the bound is
    /// the largest live index plus one, found by scanning, or 0 when the
    /// owner has no variables. The bound saturates at `u32::MAX`.
    #[must_use]
    pub fn upper_index_bound(&self, owner: OwnerId) -> u32 {
        if let Some(high_water) = self.indices.settled_high_water(owner) {
            return high_water.saturating_add(1);
        }
        self.variables
            .max_index(owner)
            .map_or(0, |max| max.saturating_add(1))
    }

    /// Iterates an owner's variables, in no particular order.
    pub fn variables(&self, owner: OwnerId) -> impl Iterator<Item = (&VarName, &Variable)> {
        self.variables.variables(owner)
    }

    /// Iterates owners that currently hold variables.
    pub fn owners(&self) -> impl Iterator<Item = OwnerId> + '_ {
        self.variables.owners()
    }

    // --- Introspection ---

    /// Returns the number of variables an owner holds.
    #[must_use]
    pub fn len(&self, owner: OwnerId) -> usize {
        self.variables.len(owner)
    }

    /// Returns true if the store holds no variables at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns true if the owner holds any variables.
    #[must_use]
    pub fn contains_owner(&self, owner: OwnerId) -> bool {
        self.variables.contains_owner(owner)
    }

    /// Returns the owner's high-water mark, if it has allocation state.
    #[must_use]
    pub fn high_water_mark(&self, owner: OwnerId) -> Option<u32> {
        self.indices.high_water_mark(owner)
    }

    /// Returns how many released indices the owner has waiting for reuse.
    #[must_use]
    pub fn free_count(&self, owner: OwnerId) -> usize {
        self.indices.free_count(owner)
    }

    /// Returns true if both structures agree on which owners exist.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.indices.len() == self.variables.owners().count()
            && self.variables.owners().all(|o| self.indices.contains(o))
    }

    fn variable(&self, owner: OwnerId, name: &str) -> Option<&Variable> {
        self.variables.get(owner, &VarName::new(name))
    }
}
