//! Filesystem source structures.

/// Search-path based module source.
pub mod fs_module_source;
