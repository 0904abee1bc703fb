//! Implementation blocks for introspection types.

/// Display and naming helpers for `MemberKind`.
pub mod member_kind;

/// Visibility and lookup helpers for `ModuleDoc`.
pub mod module_doc;

/// Summary and visibility helpers for `MemberDoc`.
pub mod member_doc;
