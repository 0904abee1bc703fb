//! Implementation blocks for the filesystem source.

/// Resolution, listing and loading for `FsModuleSource`.
pub mod fs_module_source;
