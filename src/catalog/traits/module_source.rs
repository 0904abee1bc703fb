use crate::catalog::errors::ImportError;
use crate::catalog::structs::module_location::ModuleLocation;
use crate::introspect::structs::module_doc::ModuleDoc;

/// Everything the server needs to know about modules, without tying it to one
/// resolution mechanism.
pub trait ModuleSource: Send + Sync {
    /// Resolves a dotted module name to its location.
    fn find(&self, name: &str) -> Result<ModuleLocation, ImportError>;

    /// Names (last path segment only) of the discoverable submodules of a package, sorted.
    fn submodules(&self, location: &ModuleLocation) -> Result<Vec<String>, ImportError>;

    /// Imports and introspects a module.
    fn load(&self, name: &str) -> Result<ModuleDoc, ImportError>;

    /// Modification time of the module source, in seconds since the epoch.
    fn modified(&self, name: &str) -> Option<f64>;
}
