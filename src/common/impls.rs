//! Implementation blocks for common types.

/// Constructors and trait impls for `CustomError`.
pub mod custom_error;
