use std::collections::HashSet;
use std::path::PathBuf;
use log::{debug, info};
use crate::catalog::structs::diagnostics::Diagnostics;
use crate::catalog::structs::module_catalog::ModuleCatalog;
use crate::catalog::structs::module_location::ModuleLocation;
use crate::catalog::traits::module_source::ModuleSource;

impl ModuleCatalog {
    #[tracing::instrument(level = "debug", skip(source, diagnostics))]
    pub fn new(roots: &[String], source: &dyn ModuleSource, diagnostics: &mut Diagnostics) -> ModuleCatalog {
        let mut catalog = ModuleCatalog::default();
        let mut visited: HashSet<PathBuf> = HashSet::new();

        for root in roots {
            if catalog.roots.contains(root) {
                continue;
            }
            catalog.roots.push(root.clone());
            if catalog.index.contains(root) {
                continue;
            }
            match source.find(root) {
                Ok(location) => {
                    catalog.insert(root);
                    catalog.walk(&location, source, diagnostics, &mut visited);
                }
                Err(error) => {
                    diagnostics.import_failed(&error);
                    catalog.insert(root);
                }
            }
        }

        info!("[CATALOG] {} modules discovered from {} roots", catalog.members.len(), catalog.roots.len());
        catalog
    }

    fn walk(&mut self, location: &ModuleLocation, source: &dyn ModuleSource, diagnostics: &mut Diagnostics, visited: &mut HashSet<PathBuf>) {
        if !location.is_package {
            return;
        }
        if !visited.insert(location.path.clone()) {
            debug!("[CATALOG] {} was already walked through {}", location.name, location.path.display());
            return;
        }
        let children = match source.submodules(location) {
            Ok(children) => children,
            Err(error) => {
                diagnostics.import_failed(&error);
                return;
            }
        };
        for child in children {
            let name = format!("{}.{}", location.name, child);
            if self.index.contains(&name) {
                continue;
            }
            match source.find(&name) {
                Ok(child_location) => {
                    self.insert(&name);
                    self.walk(&child_location, source, diagnostics, visited);
                }
                Err(error) => diagnostics.import_failed(&error)
            }
        }
    }

    fn insert(&mut self, name: &str) {
        if self.index.insert(name.to_string()) {
            self.members.push(name.to_string());
        }
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Direct submodules of `name`, in catalog order.
    pub fn children(&self, name: &str) -> Vec<&str> {
        let prefix = format!("{name}.");
        self.members
            .iter()
            .filter_map(|member| member.strip_prefix(prefix.as_str()).filter(|rest| !rest.contains('.')).map(|_| member.as_str()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ModuleCatalog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
