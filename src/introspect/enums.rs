//! Introspection enumerations.

/// Kinds of documented members.
pub mod member_kind;
