/// Per-connection request handling.
pub mod doc_handler;

/// Routing and page assembly.
pub mod doc_server;

/// Response constructors and conversion into hyper responses.
pub mod http_response;

/// Replays a buffered request head in front of the connection.
pub mod replay_stream;

/// Status mapping for refused requests.
pub mod request_error;

/// Path to route resolution.
pub mod route;
