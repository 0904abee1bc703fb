/// Per-connection request handler.
pub mod doc_handler;

/// Shared server state: catalog, module source and limits.
pub mod doc_server;

/// A complete response before it is handed to hyper.
pub mod http_response;

/// Connection wrapper that serves already read bytes first.
pub mod replay_stream;
