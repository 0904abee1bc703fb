//! Module catalog.
//!
//! The catalog is the immutable set of module names a server instance knows
//! how to route. It is built once, at server start, from the configured root
//! module names.
//!
//! # Discovery
//!
//! Construction is a two-phase scan over a [`ModuleSource`](traits::module_source::ModuleSource):
//!
//! 1. every root is resolved with `find`, failures are caught per root
//! 2. resolved packages are walked recursively with `submodules`
//!
//! Roots that fail to resolve still become members, so that a page request
//! for them can report the import error instead of a 404. Every failure is
//! reported once through the [`Diagnostics`](structs::diagnostics::Diagnostics)
//! sink passed to the constructor.
//!
//! # Example
//!
//! ```rust,ignore
//! use docserver::catalog::structs::diagnostics::Diagnostics;
//! use docserver::catalog::structs::module_catalog::ModuleCatalog;
//!
//! let mut diagnostics = Diagnostics::new();
//! let catalog = ModuleCatalog::new(&roots, &source, &mut diagnostics);
//! assert!(catalog.contains("markupsafe"));
//! ```

/// Import failure classification.
pub mod enums;

/// Error types for module imports.
pub mod errors;

/// Implementation blocks for the catalog and diagnostics.
pub mod impls;

/// Catalog, location and diagnostics structures.
pub mod structs;

/// The module source abstraction the catalog walks.
pub mod traits;
