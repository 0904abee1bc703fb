//! Catalog data structures.

/// Warning sink for non-fatal failures.
pub mod diagnostics;

/// The ordered set of discovered module names.
pub mod module_catalog;

/// A resolved module handle.
pub mod module_location;

/// A single non-fatal diagnostic.
pub mod warning;
