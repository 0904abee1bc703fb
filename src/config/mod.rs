//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the server
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains:
//! - **log_level**: Logging verbosity (off, trace, debug, info, warn, error)
//! - **modules**: Root module names the catalog is built from
//! - **search_path**: Directories module names are resolved against
//! - **http_server**: One or more HTTP listener instances
//!
//! # Example
//!
//! ```rust,ignore
//! use docserver::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked to
//! let config = Configuration::load_from_file("config.toml", false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
