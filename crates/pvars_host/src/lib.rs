//! Host-facing surface of pvars.
//!
//! This crate provides:
//! - [`Cell`], [`Arg`], [`OutBuffer`] - Host words and call arguments
//! - [`Params`] - Typed, position-checked argument access
//! - [`NativeInfo`] and [`NATIVES`] - The native table
//! - [`Plugin`] - Store ownership, dispatch, and lifecycle events
//! - [`PluginConfig`] - Banner, logging, and history settings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cell;
pub mod config;
pub mod natives;
pub mod params;
pub mod plugin;

pub use cell::{Arg, Cell, OutBuffer};
pub use config::{PLUGIN_AUTHOR, PLUGIN_NAME, PLUGIN_VERSION, PluginConfig};
pub use natives::{CellKind, NATIVES, NativeFn, NativeInfo};
pub use params::Params;
pub use plugin::Plugin;
