//! Page and search document rendering.
//!
//! Turns catalog data and introspected modules into the bodies served by the
//! HTTP handler. Rendering is pure: module loading happens in the caller,
//! except for [`render_search`](render::render_search) which walks the whole
//! catalog and reports every module that fails to load through the
//! diagnostics sink.
//!
//! All text taken from module sources is HTML escaped.

/// Search index entries.
pub mod structs;

/// Rendering functions.
#[allow(clippy::module_inception)]
pub mod render;
