//! Common data structures.

/// Generic string-backed error.
pub mod custom_error;
