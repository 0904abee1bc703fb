//! Filesystem module source.
//!
//! Resolves dotted module names against an ordered search path of
//! directories, the way the Python import system finds regular packages and
//! modules:
//!
//! - `a.b` resolves to `<dir>/a/b/__init__.py` (a package) or `<dir>/a/b.py`
//! - every parent (`a`) must itself be a package in the same directory
//! - the first directory that resolves the name wins
//!
//! Loading a module reads its source and runs it through the
//! [`parser`](crate::introspect::parser); nothing is executed.

/// Filesystem source structures.
pub mod structs;

/// `ModuleSource` implementation for the filesystem source.
pub mod impls;
