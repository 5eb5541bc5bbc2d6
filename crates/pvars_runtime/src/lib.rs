//! REPL, CLI, and script execution for pvars.
//!
//! This crate provides:
//! - [`Repl`] - Interactive loop and script runner hosting a plugin
//! - [`command`] - The line-oriented command language
//! - [`LineEditor`] - Editor abstraction with a rustyline implementation
//! - [`logging`] - `tracing` subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod repl;

pub use command::{Command, Token, parse_line, tokenize};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Evaluation, Repl};
