//! Implementation blocks for configuration types.

/// Loading, saving and validation of `Configuration`.
pub mod configuration;

/// Display and Error impls for `ConfigurationError`.
pub mod configuration_error;

/// Defaults and accessors for `HttpServerConfig`.
pub mod http_server_config;
