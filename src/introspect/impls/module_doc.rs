use crate::introspect::enums::member_kind::MemberKind;
use crate::introspect::structs::member_doc::MemberDoc;
use crate::introspect::structs::module_doc::ModuleDoc;

impl ModuleDoc {
    /// Members that make up the public API.
    ///
    /// With `__all__` present only the listed names are public, imported
    /// ones included. Otherwise every name without a leading underscore
    /// that the module defines itself.
    pub fn public_members(&self) -> Vec<&MemberDoc> {
        match &self.all {
            Some(all) => self.members.iter().filter(|member| all.contains(&member.name)).collect(),
            None => self
                .members
                .iter()
                .filter(|member| !member.name.starts_with('_') && member.kind != MemberKind::reexport)
                .collect()
        }
    }

    /// Absolute dotted path of an import origin as written in this module.
    ///
    /// Leading dots count up from the containing package, so `.escape.escape`
    /// in package `markupsafe` is `markupsafe.escape.escape`. `None` when the
    /// dots climb above the top-level package.
    pub fn resolve_origin(&self, origin: &str) -> Option<String> {
        let rest = origin.trim_start_matches('.');
        let level = origin.len() - rest.len();
        if level == 0 {
            return Some(origin.to_string());
        }
        let mut base: Vec<&str> = self.name.split('.').collect();
        if !self.is_package {
            base.pop();
        }
        for _ in 1..level {
            base.pop()?;
        }
        if base.is_empty() {
            return None;
        }
        if !rest.is_empty() {
            base.push(rest);
        }
        Some(base.join("."))
    }

    pub fn member(&self, qualname: &str) -> Option<&MemberDoc> {
        let mut parts = qualname.split('.');
        let first = parts.next()?;
        let mut current = self.members.iter().find(|member| member.name == first)?;
        for part in parts {
            current = current.members.iter().find(|member| member.name == part)?;
        }
        Some(current)
    }

    pub fn summary(&self) -> Option<&str> {
        self.docstring.as_deref().and_then(|doc| doc.lines().next()).filter(|line| !line.is_empty())
    }
}
