//! # docserver
//!
//! A small local HTTP server that serves generated documentation pages for
//! the modules of a Python source tree.
//!
//! ## Overview
//!
//! At start the server builds a module catalog: every configured root module
//! name is resolved against a search path and packages are walked
//! recursively. The catalog is immutable afterwards and shared by all
//! connections. Pages are rendered per request from the current source, so
//! edits show up on the next reload.
//!
//! ## Features
//!
//! - **Module catalog**: deterministic, deduplicated discovery of packages and submodules
//! - **Source introspection**: docstrings, signatures, classes, methods and variables without running any code
//! - **Search index**: `search.json` mapping fully qualified names to their metadata
//! - **Change polling**: `?mtime` exposes the source modification time of a page
//! - **Diagnostics**: modules that fail to import are reported, never fatal
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use docserver::catalog::structs::diagnostics::Diagnostics;
//! use docserver::http::structs::doc_server::DocServer;
//! use docserver::source::structs::fs_module_source::FsModuleSource;
//!
//! let source = Arc::new(FsModuleSource::new(vec!["./lib".into()]));
//! let mut diagnostics = Diagnostics::new();
//! let server = DocServer::new(&["markupsafe".to_string()], source, &mut diagnostics);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Module discovery and the diagnostics sink
//! - [`common`] - Shared helpers, logging setup and error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - Request head checks, routing over hyper and the listener service
//! - [`introspect`] - Python source scanner
//! - [`render`] - HTML pages and the search document
//! - [`source`] - Filesystem module resolution
//! - [`structs`] - CLI argument parsing

/// Module catalog and diagnostics.
///
/// Builds the ordered set of module names reachable from the configured
/// roots through the `ModuleSource` abstraction, isolating import failures
/// per module.
pub mod catalog;

/// Common utilities and shared functionality.
///
/// Contains helper functions for query parsing, HTML escaping, logging setup
/// and the generic error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, saving and validating configuration from TOML
/// files.
pub mod config;

/// HTTP/1.1 documentation server.
///
/// One request per connection, handled on any async stream, plus the TCP
/// listener service with graceful shutdown.
pub mod http;

/// Python source introspection.
pub mod introspect;

/// Rendering of the index, module pages and the search document.
pub mod render;

/// Module resolution against a search path of directories.
pub mod source;

/// CLI argument parsing.
pub mod structs;
