//! Case-normalized variable names.
//!
//! Names are lower-cased once, on construction, so every lookup and insert
//! through a [`VarName`] sees the same key regardless of the caller's casing.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A variable name, normalized to ASCII lowercase.
///
/// Only `A`-`Z` are folded; every other character is kept as-is.
/// The empty name is valid.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarName(Arc<str>);

impl VarName {
    /// Creates a normalized name from arbitrary caller input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        if raw.bytes().any(|b| b.is_ascii_uppercase()) {
            Self(raw.to_ascii_lowercase().into())
        } else {
            Self(raw.into())
        }
    }

    /// Returns the normalized name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the empty name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for VarName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VarName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for VarName {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl fmt::Debug for VarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarName({:?})", &*self.0)
    }
}

impl fmt::Display for VarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
