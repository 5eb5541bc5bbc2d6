//! Variable storage keyed by owner and normalized name.
//!
//! Each owner has an unordered name-keyed map of variables. Every variable
//! carries the index it was allocated, which is the only notion of order.

use std::collections::HashMap;

use pvars_foundation::{OwnerId, VarName, VarType, Value};

/// A single stored variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    /// Enumeration index, stable until the variable is deleted.
    pub index: u32,
    /// Current value; its kind is whatever was written last.
    pub value: Value,
}

/// Outcome of removing a variable from the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removal {
    /// Index the removed variable held.
    pub index: u32,
    /// True when the owner has no variables left (its entry is gone).
    pub owner_emptied: bool,
}

/// Stores all variable data.
///
/// An owner's entry exists only while it holds at least one variable.
#[derive(Clone, Debug, Default)]
pub struct VariableTable {
    owners: HashMap<OwnerId, HashMap<VarName, Variable>>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a variable.
    #[must_use]
    pub fn get(&self, owner: OwnerId, name: &VarName) -> Option<&Variable> {
        self.owners.get(&owner)?.get(name)
    }

    /// Gets a variable for in-place update.
    ///
    /// Only the value should be changed through this; the index is owned by
    /// the allocator.
    pub fn get_mut(&mut self, owner: OwnerId, name: &VarName) -> Option<&mut Variable> {
        self.owners.get_mut(&owner)?.get_mut(name)
    }

    /// Inserts a new variable with an already-allocated index.
    pub fn insert(&mut self, owner: OwnerId, name: VarName, index: u32, value: Value) {
        self.owners
            .entry(owner)
            .or_default()
            .insert(name, Variable { index, value });
    }

    /// Removes a variable.
    ///
    /// When this removes the owner's last variable the owner's entry is
    /// dropped as well, reported through [`Removal::owner_emptied`].
    pub fn remove(&mut self, owner: OwnerId, name: &VarName) -> Option<Removal> {
        let vars = self.owners.get_mut(&owner)?;
        let removed = vars.remove(name)?;
        let owner_emptied = vars.is_empty();
        if owner_emptied {
            self.owners.remove(&owner);
        }
        Some(Removal {
            index: removed.index,
            owner_emptied,
        })
    }

    /// Removes every variable of an owner, returning how many there were.
    pub fn remove_owner(&mut self, owner: OwnerId) -> usize {
        self.owners.remove(&owner).map_or(0, |vars| vars.len())
    }

    /// Finds the name of the variable holding `index`.
    ///
    /// Linear in the owner's variable count; there is no reverse index.
    #[must_use]
    pub fn name_at_index(&self, owner: OwnerId, index: u32) -> Option<&VarName> {
        self.owners
            .get(&owner)?
            .iter()
            .find(|(_, var)| var.index == index)
            .map(|(name, _)| name)
    }

    /// Returns the largest live index of an owner.
    #[must_use]
    pub fn max_index(&self, owner: OwnerId) -> Option<u32> {
        self.owners.get(&owner)?.values().map(|v| v.index).max()
    }

    /// Returns the declared type of a variable, `VarType::None` if absent.
    #[must_use]
    pub fn type_of(&self, owner: OwnerId, name: &VarName) -> VarType {
        self.get(owner, name)
            .map_or(VarType::None, |var| var.value.var_type())
    }

    /// Returns true if the owner has any variables.
    #[must_use]
    pub fn contains_owner(&self, owner: OwnerId) -> bool {
        self.owners.contains_key(&owner)
    }

    /// Returns the number of variables an owner holds.
    #[must_use]
    pub fn len(&self, owner: OwnerId) -> usize {
        self.owners.get(&owner).map_or(0, HashMap::len)
    }

    /// Returns true if no owner holds any variable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Iterates owners that hold variables, in no particular order.
    pub fn owners(&self) -> impl Iterator<Item = OwnerId> + '_ {
        self.owners.keys().copied()
    }

    /// Iterates an owner's variables, in no particular order.
    pub fn variables(&self, owner: OwnerId) -> impl Iterator<Item = (&VarName, &Variable)> {
        self.owners.get(&owner).into_iter().flat_map(|vars| vars.iter())
    }
}
