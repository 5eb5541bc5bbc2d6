//! Per-owner variable tables and index allocation for pvars.
//!
//! This crate provides:
//! - [`IndexAllocator`] - Per-owner index allocation with FIFO reuse
//! - [`VariableTable`] - Variable data keyed by owner and normalized name
//! - [`VarStore`] - The unified store that keeps both in step

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod allocator;
pub mod store;
pub mod table;

pub use allocator::IndexAllocator;
pub use store::VarStore;
pub use table::{Removal, Variable, VariableTable};
