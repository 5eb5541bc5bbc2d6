//! Host words, call arguments, and output string buffers.

use std::fmt;

use pvars_foundation::VarType;

/// A 32-bit host word.
///
/// Natives return a single cell. Floats travel as their IEEE-754 bit
/// pattern.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Cell(pub i32);

impl Cell {
    /// The zero cell: failure flag, absent int, absent float.
    pub const ZERO: Cell = Cell(0);

    /// The success flag.
    pub const TRUE: Cell = Cell(1);

    /// Packs a float into a cell.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn from_f32(value: f32) -> Self {
        Self(value.to_bits() as i32)
    }

    /// Reinterprets the cell as a float.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn as_f32(self) -> f32 {
        f32::from_bits(self.0 as u32)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<bool> for Cell {
    fn from(flag: bool) -> Self {
        Self(i32::from(flag))
    }
}

impl From<VarType> for Cell {
    fn from(ty: VarType) -> Self {
        Self(ty.code())
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// A writable string destination passed to a native.
///
/// Writes follow the host's copy rule: a buffer of size `n` receives at most
/// `n - 1` characters, the last slot being reserved for the terminator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutBuffer {
    contents: String,
    written: bool,
}

impl OutBuffer {
    /// Creates an empty, unwritten buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `text` into the buffer, truncated to fit `size` slots.
    ///
    /// A size of zero or less copies nothing but still marks the buffer
    /// written.
    pub fn write(&mut self, text: &str, size: i32) {
        let capacity = usize::try_from(size).unwrap_or(0).saturating_sub(1);
        self.contents.clear();
        self.contents.extend(text.chars().take(capacity));
        self.written = true;
    }

    /// Returns the buffer contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.contents
    }

    /// Returns true if a native wrote to this buffer.
    #[must_use]
    pub const fn is_written(&self) -> bool {
        self.written
    }
}

/// A single argument of a native call.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// An integer cell.
    Int(i32),
    /// A float cell.
    Float(f32),
    /// A string.
    Str(String),
    /// An output string buffer.
    Buffer(OutBuffer),
}

impl Arg {
    /// Creates a fresh output buffer argument.
    #[must_use]
    pub fn buffer() -> Self {
        Self::Buffer(OutBuffer::new())
    }

    /// Returns a short description of the argument's shape.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Buffer(_) => "buffer",
        }
    }

    /// Returns the output buffer, if this is one.
    #[must_use]
    pub const fn as_buffer(&self) -> Option<&OutBuffer> {
        match self {
            Self::Buffer(buf) => Some(buf),
            _ => None,
        }
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<OutBuffer> for Arg {
    fn from(buf: OutBuffer) -> Self {
        Self::Buffer(buf)
    }
}
