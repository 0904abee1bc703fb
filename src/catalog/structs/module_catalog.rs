use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct ModuleCatalog {
    pub(crate) roots: Vec<String>,
    pub(crate) members: Vec<String>,
    pub(crate) index: HashSet<String>,
}
