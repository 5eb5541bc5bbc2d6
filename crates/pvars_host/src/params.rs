//! Typed access to the arguments of a native call.
//!
//! Positions are 1-based, matching how the host numbers parameters.
//! Cells are untyped on the host side, so an int slot accepts a float
//! argument as its bit pattern and vice versa.

use pvars_foundation::{Error, OwnerId, Result};

use crate::cell::{Arg, Cell, OutBuffer};

const MISSING: &str = "nothing";

/// The arguments of one native call.
#[derive(Debug)]
pub struct Params<'a> {
    native: &'static str,
    args: &'a mut [Arg],
}

impl<'a> Params<'a> {
    /// Wraps the arguments of a call to `native`.
    pub fn new(native: &'static str, args: &'a mut [Arg]) -> Self {
        Self { native, args }
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns true if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Reads an owner id. Negative cells are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the argument is missing, not a cell, or negative.
    pub fn owner(&self, pos: usize) -> Result<OwnerId> {
        OwnerId::try_from(self.int(pos)?)
    }

    /// Reads an integer cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the argument is missing or not a cell.
    pub fn int(&self, pos: usize) -> Result<i32> {
        match self.arg(pos)? {
            Arg::Int(n) => Ok(*n),
            Arg::Float(f) => Ok(Cell::from_f32(*f).get()),
            other => Err(self.invalid(pos, "an integer", other.kind_name())),
        }
    }

    /// Reads a float cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the argument is missing or not a cell.
    pub fn float(&self, pos: usize) -> Result<f32> {
        match self.arg(pos)? {
            Arg::Float(f) => Ok(*f),
            Arg::Int(n) => Ok(Cell(*n).as_f32()),
            other => Err(self.invalid(pos, "a float", other.kind_name())),
        }
    }

    /// Reads a string argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the argument is missing or not a string.
    pub fn string(&self, pos: usize) -> Result<String> {
        match self.arg(pos)? {
            Arg::Str(s) => Ok(s.clone()),
            other => Err(self.invalid(pos, "a string", other.kind_name())),
        }
    }

    /// Borrows an output buffer argument for writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the argument is missing or not a buffer.
    pub fn buffer(&mut self, pos: usize) -> Result<&mut OutBuffer> {
        let native = self.native;
        let slot = match pos.checked_sub(1) {
            Some(i) => self.args.get_mut(i),
            None => None,
        };
        match slot {
            Some(Arg::Buffer(buf)) => Ok(buf),
            other => {
                let found = other.map_or(MISSING, |arg| arg.kind_name());
                Err(Error::invalid_argument(native, pos, "an output buffer", found))
            }
        }
    }

    fn arg(&self, pos: usize) -> Result<&Arg> {
        pos.checked_sub(1)
            .and_then(|i| self.args.get(i))
            .ok_or_else(|| self.invalid(pos, "present", MISSING))
    }

    fn invalid(&self, pos: usize, expected: &'static str, found: &'static str) -> Error {
        Error::invalid_argument(self.native, pos, expected, found)
    }
}
