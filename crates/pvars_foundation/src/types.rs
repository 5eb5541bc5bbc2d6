//! Type codes reported to the host.

use std::fmt;

/// Declared type of a variable, as reported by a type query.
///
/// The discriminants are the codes the host sees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum VarType {
    /// No such variable.
    #[default]
    None = 0,
    /// 32-bit signed integer.
    Int = 1,
    /// Text.
    String = 2,
    /// Single-precision float.
    Float = 3,
}

impl VarType {
    /// Returns the host-facing code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Converts a host-facing code back into a type, if valid.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Int),
            2 => Some(Self::String),
            3 => Some(Self::Float),
            _ => None,
        }
    }

    /// Returns the lowercase name of this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Int => "int",
            Self::String => "string",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
