//! Error types for pvars.
//!
//! The store itself never fails: absence is expressed with `Option`.
//! Errors here describe malformed host calls and runtime failures.

use thiserror::Error;

/// Result type alias for pvars operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for pvars operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a parameter-count mismatch error.
    #[must_use]
    pub fn arity_mismatch(native: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch {
            native: native.into(),
            expected,
            actual,
        })
    }

    /// Creates an unknown native error.
    #[must_use]
    pub fn unknown_native(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownNative(name.into()))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(
        native: impl Into<String>,
        position: usize,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            native: native.into(),
            position,
            expected,
            found,
        })
    }

    /// Creates an invalid owner error.
    #[must_use]
    pub fn invalid_owner(cell: i32) -> Self {
        Self::new(ErrorKind::InvalidOwner(cell))
    }

    /// Creates a command error.
    #[must_use]
    pub fn command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Command(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A native was called with the wrong number of parameters.
    #[error("*** {native}: Expecting {expected} parameter(s), but found {actual}")]
    ArityMismatch {
        /// Name of the native.
        native: String,
        /// Number of parameters the native takes.
        expected: usize,
        /// Number of parameters actually passed.
        actual: usize,
    },

    /// No native is registered under this name.
    #[error("unknown native: {0}")]
    UnknownNative(String),

    /// An argument did not have the shape the native expects.
    #[error("{native}: argument {position} must be {expected}, found {found}")]
    InvalidArgument {
        /// Name of the native.
        native: String,
        /// 1-based argument position.
        position: usize,
        /// Description of the expected argument.
        expected: &'static str,
        /// Shape of the argument actually passed.
        found: &'static str,
    },

    /// The owner cell was negative.
    #[error("invalid owner id: {0}")]
    InvalidOwner(i32),

    /// A runtime command could not be parsed or executed.
    #[error("{0}")]
    Command(String),

    /// Reading a script failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
