//! Owner identifiers.

use std::fmt;

/// Identifier of the entity that owns a set of variables.
///
/// Assigned by the host and opaque to the store; nothing here validates
/// that the owner actually exists on the host side.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct OwnerId(pub u32);

impl OwnerId {
    /// Creates a new owner ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for OwnerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl TryFrom<i32> for OwnerId {
    type Error = crate::Error;

    /// Converts a host cell into an owner ID, rejecting negative cells.
    fn try_from(cell: i32) -> crate::Result<Self> {
        u32::try_from(cell)
            .map(Self)
            .map_err(|_| crate::Error::invalid_owner(cell))
    }
}

impl fmt::Debug for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnerId({})", self.0)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Owner({})", self.0)
    }
}
