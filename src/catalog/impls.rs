//! Implementation blocks for catalog types.

/// Recording and querying of warnings.
pub mod diagnostics;

/// Discovery walk and queries of `ModuleCatalog`.
pub mod module_catalog;

/// Display impl for `Warning`.
pub mod warning;
