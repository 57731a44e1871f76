// SPDX-License-Identifier: Apache-2.0

//! Reader for Liberty (`.lib`) standard-cell library files.
//!
//! Reading happens in two stages. The [`parser`] drives the [`scanner`]
//! through the generic `keyword ( header ) { body }` / `keyword : value ;`
//! grammar, consulting the per-group dispatch tables in [`handler`] to decide
//! how each keyword's value is read, and records everything in an arena-backed
//! AST ([`ast`]). The binder layer in [`info`] then walks that AST, validates
//! it, resolves pin and template references, and populates a
//! [`cell_library::CellLibrary`].

pub mod ast;
pub mod attr_type;
pub mod cell_library;
pub mod error;
pub mod expr;
pub mod handler;
pub mod header;
pub mod info;
pub mod loc;
pub mod logic;
pub mod parser;
pub mod read;
pub mod scanner;
pub mod types;
pub mod util;

pub use cell_library::CellLibrary;
pub use error::{EntryFailure, ErrorKind, GroupError, LibraryError};
pub use read::{ReadOptions, read_liberty, read_liberty_bytes, read_liberty_str};
