//! Catalog enumerations.

/// Classification of import failures.
pub mod import_error_kind;
