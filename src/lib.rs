//! pvars - Per-owner typed variable store
//!
//! This crate re-exports all layers of the pvars system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: pvars_runtime    - REPL, CLI, script execution
//! Layer 2: pvars_host       - Native table, plugin lifecycle, config
//! Layer 1: pvars_storage    - Variable table, index allocator, VarStore
//! Layer 0: pvars_foundation - Core types (Value, VarType, OwnerId, Error)
//! ```

pub use pvars_foundation as foundation;
pub use pvars_host as host;
pub use pvars_runtime as runtime;
pub use pvars_storage as storage;
