use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use hyper::body::Incoming;
use hyper::header::CONTENT_LENGTH;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::{TokioIo, TokioTimer};
use log::{debug, info};
use parking_lot::Mutex;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::catalog::structs::diagnostics::Diagnostics;
use crate::http::enums::request_error::RequestError;
use crate::http::structs::doc_handler::DocHandler;
use crate::http::structs::doc_server::DocServer;
use crate::http::structs::http_response::HttpResponse;
use crate::http::structs::replay_stream::ReplayStream;

const READ_CHUNK: usize = 1024;

const HEAD_TERMINATORS: [&[u8]; 3] = [b"\r\n\r\n", b"\n\r\n", b"\n\n"];

impl DocHandler {
    pub fn new(server: Arc<DocServer>, peer: SocketAddr) -> DocHandler {
        DocHandler { server, peer }
    }

    /// Serves one request on `stream`, then closes the connection.
    ///
    /// The request head is read and checked against the timeout, size and
    /// version limits first; hyper parses and answers whatever passes.
    /// Returns the warnings raised while answering. An error means no
    /// response could be written. Requests that are read but rejected are
    /// answered with their error status and count as handled.
    #[tracing::instrument(level = "debug", skip(self, stream), fields(peer = %self.peer))]
    pub async fn handle<S>(&self, mut stream: S) -> Result<Diagnostics, RequestError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let head = match self.read_head(&mut stream).await {
            Ok(head) => head,
            Err(error) => return self.reject(stream, error).await,
        };

        let diagnostics = Arc::new(Mutex::new(Diagnostics::new()));
        let sink = diagnostics.clone();
        let server = self.server.clone();
        let peer = self.peer;
        let service = service_fn(move |request: Request<Incoming>| {
            let response = server.respond(&request, &mut sink.lock());
            let length = response.headers().get(CONTENT_LENGTH).and_then(|value| value.to_str().ok()).unwrap_or("0");
            info!("[HTTP] {peer} \"{} {} {:?}\" {} {length}", request.method(), request.uri(), request.version(), response.status().as_u16());
            std::future::ready(Ok::<_, Infallible>(response))
        });

        let mut builder = http1::Builder::new();
        builder.keep_alive(false).half_close(true).timer(TokioTimer::new());
        let result = builder.serve_connection(TokioIo::new(ReplayStream::new(head, stream)), service).await;

        match result {
            Ok(()) => Ok(std::mem::take(&mut *diagnostics.lock())),
            Err(error) if error.is_parse() || error.is_parse_too_large() => {
                debug!("[HTTP] Rejected a malformed request from {}: {error}", self.peer);
                Ok(Diagnostics::new())
            }
            Err(error) => Err(RequestError::Http(error)),
        }
    }

    async fn reject<S>(&self, mut stream: S, error: RequestError) -> Result<Diagnostics, RequestError>
    where
        S: AsyncWrite + Unpin,
    {
        let Some(status) = error.status() else {
            debug!("[HTTP] No request from {}: {error}", self.peer);
            let _ = stream.shutdown().await;
            return Err(error);
        };
        debug!("[HTTP] Rejecting request from {}: {error}", self.peer);
        let response = HttpResponse::error(status);
        stream.write_all(&response.to_bytes()).await?;
        stream.shutdown().await?;
        info!("[HTTP] {} \"-\" {} {}", self.peer, status.as_u16(), response.body.len());
        Ok(Diagnostics::new())
    }

    async fn read_head<R>(&self, reader: &mut R) -> Result<Vec<u8>, RequestError>
    where
        R: AsyncRead + Unpin,
    {
        let read = read_head(reader, self.server.max_header_size());
        match self.server.request_timeout() {
            Some(timeout) => match tokio::time::timeout(timeout, read).await {
                Ok(result) => result,
                Err(_) => Err(RequestError::Timeout)
            },
            None => read.await
        }
    }
}

/// Buffers everything up to the end of the request head.
///
/// End of stream after a partial head terminates the header block. Bytes
/// read past the head are kept so they can be replayed.
pub async fn read_head<R>(reader: &mut R, limit: usize) -> Result<Vec<u8>, RequestError>
where
    R: AsyncRead + Unpin,
{
    let mut head = Vec::with_capacity(READ_CHUNK);
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let count = reader.read(&mut chunk).await?;
        if count == 0 {
            if request_start(&head).is_none() {
                return Err(RequestError::ConnectionClosed);
            }
            let terminator: &[u8] = if head.ends_with(b"\n") { b"\r\n" } else { b"\r\n\r\n" };
            head.extend_from_slice(terminator);
            break;
        }
        head.extend_from_slice(&chunk[..count]);
        if let Some(end) = head_end(&head) {
            if end > limit {
                return Err(RequestError::HeadersTooLarge(end));
            }
            break;
        }
        if head.len() >= limit {
            return Err(RequestError::HeadersTooLarge(head.len()));
        }
    }
    check_version(&head)?;
    Ok(head)
}

fn request_start(head: &[u8]) -> Option<usize> {
    head.iter().position(|byte| *byte != b'\r' && *byte != b'\n')
}

/// Offset just past the blank line that ends the head.
fn head_end(head: &[u8]) -> Option<usize> {
    let start = request_start(head)?;
    (start..head.len()).find_map(|index| {
        let rest = &head[index..];
        HEAD_TERMINATORS
            .iter()
            .find(|terminator| rest.starts_with(terminator))
            .map(|terminator| index + terminator.len())
    })
}

/// Refuses `HTTP/x.y` request lines whose major version is not 1.
fn check_version(head: &[u8]) -> Result<(), RequestError> {
    let Some(start) = request_start(head) else {
        return Ok(());
    };
    let line = head[start..].split(|byte| *byte == b'\n').next().unwrap_or_default();
    let line = String::from_utf8_lossy(line);
    let Some(version) = line.split_whitespace().nth(2) else {
        return Ok(());
    };
    let Some((major, minor)) = version.strip_prefix("HTTP/").and_then(|number| number.split_once('.')) else {
        return Ok(());
    };
    let is_number = |part: &str| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit());
    if is_number(major) && is_number(minor) && major != "1" {
        return Err(RequestError::UnsupportedVersion(version.to_string()));
    }
    Ok(())
}
