#![allow(dead_code)]
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use docserver::catalog::errors::ImportError;
use docserver::catalog::structs::diagnostics::Diagnostics;
use docserver::catalog::structs::module_location::ModuleLocation;
use docserver::catalog::traits::module_source::ModuleSource;
use docserver::http::structs::doc_handler::DocHandler;
use docserver::http::structs::doc_server::DocServer;
use docserver::introspect::parser::parse_module;
use docserver::introspect::structs::module_doc::ModuleDoc;
use docserver::source::structs::fs_module_source::FsModuleSource;

pub type TestServer = Arc<DocServer>;

pub const DATACLASSES: &str = r#""""Generate special methods for user-defined classes."""

import re
import sys

__all__ = ['dataclass', 'field', 'Field', 'fields', 'is_dataclass', 'make_dataclass']

MISSING = object()


class Field:
    """A single field of a dataclass."""

    __slots__ = ('name', 'type', 'default')

    def __init__(self, default, default_factory, init, repr, hash, compare, metadata, kw_only):
        self.name = None

    def __repr__(self):
        return 'Field()'


def field(*, default=MISSING, default_factory=MISSING, init=True, repr=True,
          hash=None, compare=True, metadata=None, kw_only=MISSING):
    """Return an object to identify dataclass fields."""
    return Field(default, default_factory, init, repr, hash, compare, metadata, kw_only)


def fields(class_or_instance):
    """Return a tuple describing the fields of this dataclass."""


def is_dataclass(obj):
    """Returns True if obj is a dataclass or an instance of a
    dataclass."""
    cls = obj if isinstance(obj, type) else type(obj)
    return hasattr(cls, '__dataclass_fields__')


def make_dataclass(cls_name, fields, *, bases=(), namespace=None, init=True):
    """Return a new dynamically created dataclass."""


def dataclass(cls=None, /, *, init=True, repr=True, eq=True, order=False):
    """Add dunder methods based on the fields defined in the class."""
    return cls
"#;

pub const MARKUPSAFE_INIT: &str = r#""""Implements an escape function and a Markup string to replace HTML
special characters with safe representations.

Maintained by the Pallets project.
"""
import typing as t

from .escape import escape
from .escape import soft_str

__all__ = ["escape", "Markup", "soft_str"]

__version__ = "2.1.3"


class Markup(str):
    """A string that is ready to be safely inserted into an HTML or XML
    document, either because it was escaped or because it was marked
    safe.
    """

    __slots__ = ()

    def __new__(cls, base="", encoding=None, errors="strict"):
        return super().__new__(cls, base)

    def __html__(self) -> "Markup":
        return self

    def unescape(self) -> str:
        """Convert escaped markup back into a text string."""

    def striptags(self) -> str:
        """unescape the markup, remove tags, and normalize whitespace."""

    @classmethod
    def escape(cls, s: t.Any) -> "Markup":
        """Escape a string. Calls :func:`escape` and ensures that for
        subclasses the correct type is returned.
        """
"#;

pub const MARKUPSAFE_ESCAPE: &str = r#""""Pure Python escape implementation."""


def escape(s):
    """Replace the characters ``&``, ``<``, ``>``, ``'``, and ``"`` in
    the string with HTML-safe sequences."""


def soft_str(s):
    """Convert an object to a string if it isn't already."""
"#;

pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Source tree with `dataclasses`, the `markupsafe` package and no `err`.
pub fn create_fixture_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "dataclasses.py", DATACLASSES);
    write_file(dir.path(), "markupsafe/__init__.py", MARKUPSAFE_INIT);
    write_file(dir.path(), "markupsafe/escape.py", MARKUPSAFE_ESCAPE);
    write_file(dir.path(), "markupsafe/_speedups.py", "def escape(s): ...\n");
    write_file(dir.path(), "markupsafe/py.typed", "");
    dir
}

pub fn roots(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Server over the fixture tree, with the warnings raised while building its catalog.
pub fn create_test_server(dir: &TempDir, names: &[&str]) -> (TestServer, Diagnostics) {
    let source = Arc::new(FsModuleSource::new(vec![dir.path().to_path_buf()]));
    let mut diagnostics = Diagnostics::new();
    let server = DocServer::new(&roots(names), source, &mut diagnostics);
    (Arc::new(server), diagnostics)
}

pub fn create_default_server(dir: &TempDir) -> TestServer {
    create_test_server(dir, &["dataclasses", "err", "markupsafe"]).0
}

/// Drives one request through a handler over an in-memory stream.
///
/// The response is drained concurrently so large bodies cannot stall the
/// handler on a full buffer.
pub async fn handle_request(server: &TestServer, request: &[u8]) -> (Vec<u8>, Diagnostics) {
    let handler = DocHandler::new(server.clone(), "127.0.0.1:40000".parse().unwrap());
    let (mut client, stream) = tokio::io::duplex(1024);
    let client_side = async move {
        // The handler stops reading at its header limit and may hang up mid-request.
        let _ = client.write_all(request).await;
        let mut response = Vec::new();
        client.read_to_end(&mut response).await.unwrap();
        response
    };
    let (response, result) = tokio::join!(client_side, handler.handle(stream));
    (response, result.expect("request was not answered"))
}

pub async fn get(server: &TestServer, target: &str) -> (Vec<u8>, Diagnostics) {
    handle_request(server, format!("GET {target} HTTP/1.1\r\nHost: localhost\r\n\r\n").as_bytes()).await
}

pub async fn head(server: &TestServer, target: &str) -> (Vec<u8>, Diagnostics) {
    handle_request(server, format!("HEAD {target} HTTP/1.1\r\nHost: localhost\r\n\r\n").as_bytes()).await
}

/// Status line plus headers, and the body.
pub fn split_response(response: &[u8]) -> (String, Vec<u8>) {
    let end = response
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .expect("response has no header terminator");
    (String::from_utf8(response[..end].to_vec()).unwrap(), response[end + 4..].to_vec())
}

/// Status line plus headers without the `date` header, which changes between responses.
pub fn head_without_date(response: &[u8]) -> String {
    let (head, _) = split_response(response);
    head.lines()
        .filter(|line| !line.to_ascii_lowercase().starts_with("date:"))
        .collect::<Vec<_>>()
        .join("\r\n")
}

pub fn status(response: &[u8]) -> u16 {
    let (head, _) = split_response(response);
    head.split(' ').nth(1).unwrap().parse().unwrap()
}

pub fn body_text(response: &[u8]) -> String {
    String::from_utf8(split_response(response).1).unwrap()
}

pub fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines()
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.trim())
}

pub fn set_mtime(path: &Path, secs: u64) {
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(UNIX_EPOCH + Duration::from_secs(secs)).unwrap();
}

/// In-memory module tree: dotted name to (is_package, source).
pub struct MapSource {
    modules: BTreeMap<String, (bool, String)>,
}

impl MapSource {
    pub fn new(entries: &[(&str, bool)]) -> MapSource {
        MapSource {
            modules: entries
                .iter()
                .map(|(name, is_package)| (name.to_string(), (*is_package, format!("\"\"\"{name}\"\"\"\ndef api():\n    pass\n"))))
                .collect(),
        }
    }
}

impl ModuleSource for MapSource {
    fn find(&self, name: &str) -> Result<ModuleLocation, ImportError> {
        match self.modules.get(name) {
            Some((is_package, _)) => Ok(ModuleLocation {
                name: name.to_string(),
                path: PathBuf::from(format!("/memory/{name}")),
                is_package: *is_package,
            }),
            None => Err(ImportError::not_found(name))
        }
    }

    fn submodules(&self, location: &ModuleLocation) -> Result<Vec<String>, ImportError> {
        let prefix = format!("{}.", location.name);
        Ok(self
            .modules
            .keys()
            .filter_map(|name| name.strip_prefix(prefix.as_str()))
            .filter(|rest| !rest.contains('.'))
            .map(str::to_string)
            .collect())
    }

    fn load(&self, name: &str) -> Result<ModuleDoc, ImportError> {
        match self.modules.get(name) {
            Some((_, source)) => parse_module(name, source),
            None => Err(ImportError::not_found(name))
        }
    }

    fn modified(&self, name: &str) -> Option<f64> {
        self.modules.get(name).map(|_| 0.0)
    }
}
