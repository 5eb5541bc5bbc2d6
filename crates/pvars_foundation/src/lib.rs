//! Core types, values, and errors for pvars.
//!
//! This crate provides:
//! - [`Value`] - The typed value held by a variable
//! - [`VarType`] - Type codes reported to the host
//! - [`OwnerId`] - Identifier of the entity owning a set of variables
//! - [`VarName`] - Case-normalized variable names
//! - [`Error`] - Error types for malformed host calls

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod name;
pub mod owner;
pub mod types;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use name::VarName;
pub use owner::OwnerId;
pub use types::VarType;
pub use value::Value;
