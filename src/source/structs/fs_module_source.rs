use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsModuleSource {
    pub(crate) search_path: Vec<PathBuf>,
}
