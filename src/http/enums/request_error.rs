use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Connection closed before a request was received")]
    ConnectionClosed,
    #[error("Request head exceeds {0} bytes")]
    HeadersTooLarge(usize),
    #[error("Unsupported protocol version: {0}")]
    UnsupportedVersion(String),
    #[error("Timed out waiting for the request")]
    Timeout,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] hyper::Error),
}
