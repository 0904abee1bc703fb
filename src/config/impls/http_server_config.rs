use std::time::Duration;
use crate::config::structs::http_server_config::HttpServerConfig;

pub const DEFAULT_MAX_HEADER_SIZE: usize = 16384;

impl HttpServerConfig {
    pub fn init() -> HttpServerConfig {
        HttpServerConfig {
            enabled: true,
            bind_address: String::from("127.0.0.1:8080"),
            request_timeout: Some(15),
            max_header_size: Some(DEFAULT_MAX_HEADER_SIZE),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout.filter(|secs| *secs > 0).map(Duration::from_secs)
    }

    pub fn max_header_size(&self) -> usize {
        self.max_header_size.unwrap_or(DEFAULT_MAX_HEADER_SIZE)
    }
}
