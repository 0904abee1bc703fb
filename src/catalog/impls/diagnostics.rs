use log::warn;
use crate::catalog::errors::ImportError;
use crate::catalog::structs::diagnostics::Diagnostics;
use crate::catalog::structs::warning::Warning;

impl Diagnostics {
    pub fn new() -> Diagnostics {
        Diagnostics { warnings: Vec::new() }
    }

    pub fn warn(&mut self, module: &str, message: String) {
        warn!("[CATALOG] {message}");
        self.warnings.push(Warning {
            module: module.to_string(),
            message,
        });
    }

    pub fn import_failed(&mut self, error: &ImportError) {
        self.warn(&error.module, format!("Error importing '{}': {}", error.module, error));
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn for_module(&self, module: &str) -> Vec<&Warning> {
        self.warnings.iter().filter(|warning| warning.module == module).collect()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
