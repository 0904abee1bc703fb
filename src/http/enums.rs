/// Failures while receiving a request.
pub mod request_error;

/// Routing targets.
pub mod route;
