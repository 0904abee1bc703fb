//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the documentation server.
//!
//! # Utilities
//!
//! - Query string parsing
//! - HTML escaping
//! - Logging setup
//! - Timestamp utilities
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type
//!
//! # Example
//!
//! ```rust,ignore
//! use docserver::common::common::{parse_query, html_escape};
//!
//! // Parse query string
//! let params = parse_query(Some(String::from("mtime=1")));
//!
//! // Escape text for an HTML page
//! let safe = html_escape("<b>&</b>");
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for the common helpers.
pub mod tests;
