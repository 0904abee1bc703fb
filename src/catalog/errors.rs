use thiserror::Error;
use crate::catalog::enums::import_error_kind::ImportErrorKind;

/// Failure to import (resolve, read or scan) a module.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ImportError {
    pub module: String,
    pub kind: ImportErrorKind,
    pub message: String,
}

impl ImportError {
    pub fn new(module: &str, kind: ImportErrorKind, message: impl Into<String>) -> ImportError {
        ImportError {
            module: module.to_string(),
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(module: &str) -> ImportError {
        ImportError::new(module, ImportErrorKind::ModuleNotFoundError, format!("No module named '{module}'"))
    }

    pub fn from_io(module: &str, error: &std::io::Error) -> ImportError {
        match error.kind() {
            std::io::ErrorKind::NotFound => ImportError::not_found(module),
            std::io::ErrorKind::InvalidData => ImportError::new(module, ImportErrorKind::UnicodeDecodeError, error.to_string()),
            _ => ImportError::new(module, ImportErrorKind::OSError, error.to_string())
        }
    }
}
