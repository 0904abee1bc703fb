use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{HeaderValue, CONNECTION, CONTENT_LENGTH, CONTENT_TYPE, SERVER};
use hyper::{Response, StatusCode};
use crate::http::structs::http_response::HttpResponse;
use crate::render::render::render_not_found;

pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

pub const SERVER_NAME: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl HttpResponse {
    pub fn new(status: StatusCode, content_type: &'static str, body: impl Into<Bytes>) -> HttpResponse {
        HttpResponse { status, content_type, body: body.into() }
    }

    pub fn html(body: String) -> HttpResponse {
        HttpResponse::new(StatusCode::OK, CONTENT_TYPE_HTML, body)
    }

    pub fn json(body: Vec<u8>) -> HttpResponse {
        HttpResponse::new(StatusCode::OK, CONTENT_TYPE_JSON, body)
    }

    pub fn not_found(path: &str) -> HttpResponse {
        HttpResponse::new(StatusCode::NOT_FOUND, CONTENT_TYPE_TEXT, render_not_found(path))
    }

    /// Plain text response whose body is the status code and reason.
    pub fn error(status: StatusCode) -> HttpResponse {
        HttpResponse::new(status, CONTENT_TYPE_TEXT, format!("{status}\n"))
    }

    /// Converts into the response hyper writes.
    ///
    /// `head_only` drops the body but keeps its `Content-Length`.
    pub fn into_response(self, head_only: bool) -> Response<Full<Bytes>> {
        let length = self.body.len();
        let body = if head_only { Bytes::new() } else { self.body };
        let mut response = Response::new(Full::new(body));
        *response.status_mut() = self.status;
        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        headers.insert(CONTENT_LENGTH, HeaderValue::from(length));
        headers.insert(CONNECTION, HeaderValue::from_static("close"));
        headers.insert(SERVER, HeaderValue::from_static(SERVER_NAME));
        response
    }

    /// Serialized form for requests refused before they reach hyper.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = format!(
            "HTTP/1.1 {}\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\nserver: {SERVER_NAME}\r\n\r\n",
            self.status,
            self.content_type,
            self.body.len()
        )
        .into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}
