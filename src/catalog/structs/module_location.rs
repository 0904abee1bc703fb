use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLocation {
    pub name: String,
    /// The source file: `__init__.py` for packages.
    pub path: PathBuf,
    pub is_package: bool,
}
