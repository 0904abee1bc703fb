//! Catalog trait definitions.

/// Import and package-listing capability.
pub mod module_source;
