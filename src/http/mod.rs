//! HTTP documentation server.
//!
//! HTTP/1.1 on top of hyper: every connection carries exactly one request,
//! answered with `Connection: close`. The handler works on any
//! `AsyncRead + AsyncWrite` stream, so it can be driven without a socket.
//! The request head is buffered and checked before hyper parses it.
//!
//! # Routes
//!
//! - `/`, `/index.html` - index of the configured root modules
//! - `/search.json` - search index over every module that loads
//! - `/<module>.html` - module page, `/<a>/<b>.html` is the same as `/<a.b>.html`
//! - `?mtime` on a module page appends the source modification time
//!
//! `GET` and `HEAD` are served, every other method or path gets a `404`.
//!
//! # Malformed requests
//!
//! | Condition | Status |
//! |---|---|
//! | request line or header hyper cannot parse, undecodable path | 400 |
//! | no complete head within `request_timeout` | 408 |
//! | head larger than `max_header_size` | 431 |
//! | protocol other than `HTTP/1.x` | 505 |
//!
//! A peer that closes the connection without sending anything gets no response.

/// Routing and read failure enumerations.
pub mod enums;

/// Response, stream, server and handler structures.
pub mod structs;

/// Implementation blocks for the HTTP types.
pub mod impls;

/// Listener service.
#[allow(clippy::module_inception)]
pub mod http;

/// Unit tests for head checks, routing, responses and the handler.
pub mod tests;
