//! Introspection data structures.

/// Documentation extracted for one module.
pub mod module_doc;

/// Documentation extracted for one member (function, class, variable...).
pub mod member_doc;

/// A statement folded onto a single line by the scanner.
pub mod logical_line;
