use std::path::PathBuf;
use crate::introspect::structs::member_doc::MemberDoc;

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDoc {
    pub name: String,
    pub docstring: Option<String>,
    /// Names listed in `__all__`, when the module defines it.
    pub all: Option<Vec<String>>,
    pub members: Vec<MemberDoc>,
    pub path: Option<PathBuf>,
    pub is_package: bool,
}
