use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpServerConfig {
    pub enabled: bool,
    pub bind_address: String,
    /// Seconds allowed for reading the request line and headers.
    pub request_timeout: Option<u64>,
    /// Upper bound in bytes for the request line plus headers.
    pub max_header_size: Option<usize>,
}
