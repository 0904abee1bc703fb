use hyper::StatusCode;
use crate::http::enums::request_error::RequestError;

impl RequestError {
    /// Status to answer with, `None` when the peer can no longer be answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Timeout => Some(StatusCode::REQUEST_TIMEOUT),
            RequestError::HeadersTooLarge(_) => Some(StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE),
            RequestError::UnsupportedVersion(_) => Some(StatusCode::HTTP_VERSION_NOT_SUPPORTED),
            RequestError::ConnectionClosed | RequestError::Io(_) | RequestError::Http(_) => None,
        }
    }
}
