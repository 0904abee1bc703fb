use crate::introspect::structs::member_doc::MemberDoc;

impl MemberDoc {
    /// First line of the docstring.
    pub fn summary(&self) -> Option<&str> {
        self.docstring.as_deref().and_then(|doc| doc.lines().next()).filter(|line| !line.is_empty())
    }

    /// Class members shown on a page: public names plus `__init__`.
    pub fn public_members(&self) -> Vec<&MemberDoc> {
        self.members.iter().filter(|member| !member.name.starts_with('_') || member.name == "__init__").collect()
    }
}
