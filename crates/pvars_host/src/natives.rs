//! The native table.
//!
//! Each native is a plain function pointer over the store and the call's
//! parameters. The parameter count is checked before the function runs, so
//! a malformed call never reaches the store.

use std::fmt;

use pvars_foundation::{Error, Result};
use pvars_storage::VarStore;

use crate::cell::{Arg, Cell};
use crate::params::Params;

/// Signature shared by every native.
pub type NativeFn = fn(&mut VarStore, &mut Params<'_>) -> Result<Cell>;

/// How a native's return cell should be read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// The cell is an integer or flag.
    Int,
    /// The cell holds the bits of a float.
    Float,
    /// The cell is a variable type code.
    TypeCode,
}

/// A native entry point.
#[derive(Clone, Copy)]
pub struct NativeInfo {
    /// Name the host registers the native under.
    pub name: &'static str,
    /// Names of the parameters, in order.
    pub params: &'static [&'static str],
    /// How to read the return cell.
    pub returns: CellKind,
    /// The implementation.
    pub func: NativeFn,
}

impl NativeInfo {
    /// Returns the number of parameters the native takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }

    /// Calls the native after checking the parameter count.
    ///
    /// # Errors
    ///
    /// Returns an arity error if `args` has the wrong length, or the
    /// native's own error for a badly shaped argument.
    pub fn call(&self, store: &mut VarStore, args: &mut [Arg]) -> Result<Cell> {
        if args.len() != self.arity() {
            return Err(Error::arity_mismatch(self.name, self.arity(), args.len()));
        }
        let mut params = Params::new(self.name, args);
        (self.func)(store, &mut params)
    }

    /// Returns a usage line such as `PVarGetInt owner name`.
    #[must_use]
    pub fn usage(&self) -> String {
        let mut line = self.name.to_string();
        for param in self.params {
            line.push(' ');
            line.push_str(param);
        }
        line
    }
}

impl fmt::Debug for NativeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeInfo")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("returns", &self.returns)
            .finish_non_exhaustive()
    }
}

/// Every native, in registration order.
pub static NATIVES: &[NativeInfo] = &[
    NativeInfo {
        name: "PVarSetInt",
        params: &["owner", "name", "value"],
        returns: CellKind::Int,
        func: set_int,
    },
    NativeInfo {
        name: "PVarGetInt",
        params: &["owner", "name"],
        returns: CellKind::Int,
        func: get_int,
    },
    NativeInfo {
        name: "PVarSetString",
        params: &["owner", "name", "value"],
        returns: CellKind::Int,
        func: set_string,
    },
    NativeInfo {
        name: "PVarGetString",
        params: &["owner", "name", "dest", "size"],
        returns: CellKind::Int,
        func: get_string,
    },
    NativeInfo {
        name: "PVarSetFloat",
        params: &["owner", "name", "value"],
        returns: CellKind::Int,
        func: set_float,
    },
    NativeInfo {
        name: "PVarGetFloat",
        params: &["owner", "name"],
        returns: CellKind::Float,
        func: get_float,
    },
    NativeInfo {
        name: "PVarDelete",
        params: &["owner", "name"],
        returns: CellKind::Int,
        func: delete,
    },
    NativeInfo {
        name: "PVarsGetUpperIndex",
        params: &["owner"],
        returns: CellKind::Int,
        func: upper_index,
    },
    NativeInfo {
        name: "PVarGetNameAtIndex",
        params: &["owner", "index", "dest", "size"],
        returns: CellKind::Int,
        func: name_at_index,
    },
    NativeInfo {
        name: "PVarGetType",
        params: &["owner", "name"],
        returns: CellKind::TypeCode,
        func: get_type,
    },
];

/// Looks up a native by exact name.
#[must_use]
pub fn find(name: &str) -> Option<&'static NativeInfo> {
    NATIVES.iter().find(|native| native.name == name)
}

fn set_int(store: &mut VarStore, params: &mut Params<'_>) -> Result<Cell> {
    let owner = params.owner(1)?;
    let name = params.string(2)?;
    let value = params.int(3)?;
    store.set_int(owner, &name, value);
    Ok(Cell::TRUE)
}

fn get_int(store: &mut VarStore, params: &mut Params<'_>) -> Result<Cell> {
    let owner = params.owner(1)?;
    let name = params.string(2)?;
    Ok(Cell(store.get_int(owner, &name).unwrap_or(0)))
}

fn set_string(store: &mut VarStore, params: &mut Params<'_>) -> Result<Cell> {
    let owner = params.owner(1)?;
    let name = params.string(2)?;
    let value = params.string(3)?;
    store.set_string(owner, &name, &value);
    Ok(Cell::TRUE)
}

fn get_string(store: &mut VarStore, params: &mut Params<'_>) -> Result<Cell> {
    let owner = params.owner(1)?;
    let name = params.string(2)?;
    let size = params.int(4)?;
    let dest = params.buffer(3)?;

    match store.get_string(owner, &name) {
        Some(text) => {
            dest.write(text, size);
            Ok(Cell::TRUE)
        }
        None => Ok(Cell::ZERO),
    }
}

fn set_float(store: &mut VarStore, params: &mut Params<'_>) -> Result<Cell> {
    let owner = params.owner(1)?;
    let name = params.string(2)?;
    let value = params.float(3)?;
    store.set_float(owner, &name, value);
    Ok(Cell::TRUE)
}

fn get_float(store: &mut VarStore, params: &mut Params<'_>) -> Result<Cell> {
    let owner = params.owner(1)?;
    let name = params.string(2)?;
    Ok(store
        .get_float(owner, &name)
        .map_or(Cell::ZERO, Cell::from_f32))
}

fn delete(store: &mut VarStore, params: &mut Params<'_>) -> Result<Cell> {
    let owner = params.owner(1)?;
    let name = params.string(2)?;
    Ok(Cell::from(store.delete(owner, &name).is_some()))
}

fn upper_index(store: &mut VarStore, params: &mut Params<'_>) -> Result<Cell> {
    let owner = params.owner(1)?;
    let bound = store.upper_index_bound(owner);
    Ok(Cell(i32::try_from(bound).unwrap_or(i32::MAX)))
}

fn name_at_index(store: &mut VarStore, params: &mut Params<'_>) -> Result<Cell> {
    let owner = params.owner(1)?;
    let index = params.int(2)?;
    let size = params.int(4)?;
    let dest = params.buffer(3)?;

    let found = u32::try_from(index)
        .ok()
        .and_then(|index| store.name_at_index(owner, index));
    match found {
        Some(name) => {
            dest.write(name, size);
            Ok(Cell::TRUE)
        }
        None => Ok(Cell::ZERO),
    }
}

fn get_type(store: &mut VarStore, params: &mut Params<'_>) -> Result<Cell> {
    let owner = params.owner(1)?;
    let name = params.string(2)?;
    Ok(Cell::from(store.type_of(owner, &name)))
}
