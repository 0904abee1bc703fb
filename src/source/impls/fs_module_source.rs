use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use crate::catalog::enums::import_error_kind::ImportErrorKind;
use crate::catalog::errors::ImportError;
use crate::catalog::structs::module_location::ModuleLocation;
use crate::catalog::traits::module_source::ModuleSource;
use crate::common::common::{is_identifier, system_time_to_secs};
use crate::config::structs::configuration::Configuration;
use crate::introspect::parser::parse_module;
use crate::introspect::structs::module_doc::ModuleDoc;
use crate::source::structs::fs_module_source::FsModuleSource;

const PACKAGE_INIT: &str = "__init__.py";
const SOURCE_SUFFIX: &str = ".py";

impl FsModuleSource {
    pub fn new(search_path: Vec<PathBuf>) -> FsModuleSource {
        FsModuleSource { search_path }
    }

    pub fn from_config(config: &Configuration) -> FsModuleSource {
        if config.search_path.is_empty() {
            return FsModuleSource::new(vec![PathBuf::from(".")]);
        }
        FsModuleSource::new(config.search_path.iter().map(PathBuf::from).collect())
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Source file and package flag of `name`, if any search path entry provides it.
    ///
    /// Only regular packages count: a directory without `__init__.py` is
    /// skipped, and a module of the same name further down the search path
    /// is found instead.
    fn resolve(&self, name: &str) -> Option<(PathBuf, bool)> {
        let parts: Vec<&str> = name.split('.').collect();
        if !parts.iter().all(|part| is_identifier(part)) {
            return None;
        }
        let (last, parents) = parts.split_last()?;

        'search: for directory in &self.search_path {
            let mut base = directory.clone();
            for parent in parents {
                base.push(parent);
                if !base.join(PACKAGE_INIT).is_file() {
                    continue 'search;
                }
            }
            let package = base.join(last);
            let init = package.join(PACKAGE_INIT);
            if init.is_file() {
                return Some((init, true));
            }
            let module = base.join(format!("{last}{SOURCE_SUFFIX}"));
            if module.is_file() {
                return Some((module, false));
            }
        }
        None
    }

    fn decode(name: &str, data: Vec<u8>) -> Result<String, ImportError> {
        match String::from_utf8(data) {
            Ok(text) if text.starts_with('\u{feff}') => Ok(text['\u{feff}'.len_utf8()..].to_string()),
            Ok(text) => Ok(text),
            Err(error) => {
                let position = error.utf8_error().valid_up_to();
                let byte = error.as_bytes().get(position).copied().unwrap_or_default();
                Err(ImportError::new(
                    name,
                    ImportErrorKind::UnicodeDecodeError,
                    format!("'utf-8' codec can't decode byte 0x{byte:02x} in position {position}: invalid utf-8"),
                ))
            }
        }
    }
}

fn discoverable(name: &str) -> bool {
    is_identifier(name) && !name.starts_with('_')
}

fn is_package_dir(path: &Path) -> bool {
    path.is_dir() && path.join(PACKAGE_INIT).is_file()
}

impl ModuleSource for FsModuleSource {
    fn find(&self, name: &str) -> Result<ModuleLocation, ImportError> {
        match self.resolve(name) {
            Some((path, is_package)) => {
                let path = fs::canonicalize(&path).unwrap_or(path);
                debug!("[SOURCE] {name} resolved to {}", path.display());
                Ok(ModuleLocation {
                    name: name.to_string(),
                    path,
                    is_package,
                })
            }
            None => Err(ImportError::not_found(name))
        }
    }

    fn submodules(&self, location: &ModuleLocation) -> Result<Vec<String>, ImportError> {
        if !location.is_package {
            return Ok(Vec::new());
        }
        let Some(directory) = location.path.parent() else {
            return Ok(Vec::new());
        };
        let entries = fs::read_dir(directory).map_err(|error| ImportError::from_io(&location.name, &error))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|error| ImportError::from_io(&location.name, &error))?;
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            let path = entry.path();
            if let Some(stem) = file_name.strip_suffix(SOURCE_SUFFIX) {
                if path.is_file() && discoverable(stem) {
                    names.push(stem.to_string());
                }
            } else if discoverable(&file_name) && is_package_dir(&path) {
                names.push(file_name);
            }
        }
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn load(&self, name: &str) -> Result<ModuleDoc, ImportError> {
        let location = self.find(name)?;
        let data = fs::read(&location.path).map_err(|error| ImportError::from_io(name, &error))?;
        let text = Self::decode(name, data)?;
        let mut module = parse_module(name, &text)?;
        module.path = Some(location.path);
        module.is_package = location.is_package;
        Ok(module)
    }

    fn modified(&self, name: &str) -> Option<f64> {
        let location = self.find(name).ok()?;
        let modified = fs::metadata(&location.path).and_then(|metadata| metadata.modified()).ok()?;
        Some(system_time_to_secs(modified))
    }
}
