use std::net::SocketAddr;
use std::sync::Arc;
use crate::http::structs::doc_server::DocServer;

/// Serves exactly one request on one connection.
pub struct DocHandler {
    pub(crate) server: Arc<DocServer>,
    pub(crate) peer: SocketAddr,
}
