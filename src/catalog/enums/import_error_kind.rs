use std::fmt;
use std::fmt::Formatter;
use serde::{Deserialize, Serialize};

/// Named after the exception a Python interpreter would raise for the same failure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportErrorKind {
    ModuleNotFoundError,
    SyntaxError,
    UnicodeDecodeError,
    OSError,
}

impl fmt::Display for ImportErrorKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            ImportErrorKind::ModuleNotFoundError => "ModuleNotFoundError",
            ImportErrorKind::SyntaxError => "SyntaxError",
            ImportErrorKind::UnicodeDecodeError => "UnicodeDecodeError",
            ImportErrorKind::OSError => "OSError",
        };
        write!(f, "{name}")
    }
}
