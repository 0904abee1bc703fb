//! Source introspection module.
//!
//! Extracts the documented surface of a Python module from its source text
//! without executing it.
//!
//! # Extraction
//!
//! The scanner first folds the source into logical lines (joining bracketed
//! continuations and backslash continuations, keeping string literals whole
//! and dropping comments). Statements at a given indentation are then read as:
//!
//! - `def` / `async def` headers with their signature and docstring
//! - `class` headers with bases, docstring, methods and class attributes
//! - plain and annotated assignments, with a docstring when a string literal
//!   directly follows
//! - decorators preceding a definition
//! - `__all__`, which restricts the public surface when present
//!
//! Statements nested under `if`/`try` blocks are not inspected.
//!
//! # Errors
//!
//! Unterminated strings and unbalanced brackets produce a `SyntaxError`
//! [`ImportError`](crate::catalog::errors::ImportError).

/// Member kind enumeration.
pub mod enums;

/// Module and member documentation structures.
pub mod structs;

/// Implementation blocks for documentation structures.
pub mod impls;

/// The source scanner and statement parser.
pub mod parser;
