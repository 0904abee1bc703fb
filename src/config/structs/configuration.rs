use serde::{Deserialize, Serialize};
use crate::config::structs::http_server_config::HttpServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub modules: Vec<String>,
    #[serde(default)]
    pub search_path: Vec<String>,
    #[serde(default)]
    pub http_server: Vec<HttpServerConfig>
}
