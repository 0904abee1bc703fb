#[cfg(test)]
mod http_tests {
    mod head_tests {
        use crate::http::enums::request_error::RequestError;
        use crate::http::impls::doc_handler::read_head;

        async fn read(raw: &[u8]) -> Result<Vec<u8>, RequestError> {
            let mut reader = raw;
            read_head(&mut reader, 1024).await
        }

        #[tokio::test]
        async fn test_head_keeps_bytes_past_the_blank_line() {
            let raw = b"GET /markupsafe.html?mtime HTTP/1.1\r\nHost: localhost\r\n\r\nbody";
            assert_eq!(read(raw).await.unwrap(), raw.to_vec());
        }

        #[tokio::test]
        async fn test_head_bare_newlines_and_leading_blank_lines() {
            let raw = b"\r\n\nHEAD / HTTP/1.0\nAccept: */*\n\n";
            assert_eq!(read(raw).await.unwrap(), raw.to_vec());
        }

        #[tokio::test]
        async fn test_head_ends_at_eof() {
            assert_eq!(read(b"GET / HTTP/1.1\r\nHost: x\r\n").await.unwrap(), b"GET / HTTP/1.1\r\nHost: x\r\n\r\n".to_vec());
            assert_eq!(read(b"GET / HTTP/1.1").await.unwrap(), b"GET / HTTP/1.1\r\n\r\n".to_vec());
        }

        #[tokio::test]
        async fn test_head_empty_stream() {
            assert!(matches!(read(b"").await, Err(RequestError::ConnectionClosed)));
            assert!(matches!(read(b"\r\n\r\n").await, Err(RequestError::ConnectionClosed)));
        }

        #[tokio::test]
        async fn test_head_unsupported_version() {
            let error = read(b"GET / HTTP/2.0\r\n\r\n").await.unwrap_err();
            assert!(matches!(error, RequestError::UnsupportedVersion(ref version) if version == "HTTP/2.0"));
            assert_eq!(error.status().map(|status| status.as_u16()), Some(505));

            assert!(read(b"GET / HTTP/1.0\r\n\r\n").await.is_ok());
            assert!(read(b"GET / HTTP/one\r\n\r\n").await.is_ok());
        }

        #[tokio::test]
        async fn test_head_too_large() {
            let mut raw = b"GET / HTTP/1.1\r\n".to_vec();
            raw.extend_from_slice(format!("X-Padding: {}\r\n\r\n", "a".repeat(2048)).as_bytes());
            let error = read(&raw).await.unwrap_err();
            assert!(matches!(error, RequestError::HeadersTooLarge(_)));
            assert_eq!(error.status().map(|status| status.as_u16()), Some(431));

            let long_line = format!("GET /{} HTTP/1.1\r\n\r\n", "a".repeat(4096));
            assert!(matches!(read(long_line.as_bytes()).await, Err(RequestError::HeadersTooLarge(_))));
        }

        #[tokio::test]
        async fn test_head_exactly_at_limit() {
            let line = b"GET / HTTP/1.1\r\n";
            let padding = 1024 - line.len() - b"X: \r\n\r\n".len();
            let mut raw = line.to_vec();
            raw.extend_from_slice(format!("X: {}\r\n\r\n", "a".repeat(padding)).as_bytes());
            assert_eq!(raw.len(), 1024);
            assert!(read(&raw).await.is_ok());
        }
    }

    mod replay_tests {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use crate::http::structs::replay_stream::ReplayStream;

        #[tokio::test]
        async fn test_replay_serves_prefix_first() {
            let (mut client, server) = tokio::io::duplex(64);
            client.write_all(b" world").await.unwrap();
            client.shutdown().await.unwrap();

            let mut stream = ReplayStream::new(b"hello".to_vec(), server);
            let mut output = String::new();
            stream.read_to_string(&mut output).await.unwrap();
            assert_eq!(output, "hello world");

            stream.write_all(b"reply").await.unwrap();
            drop(stream);
            let mut reply = String::new();
            client.read_to_string(&mut reply).await.unwrap();
            assert_eq!(reply, "reply");
        }
    }

    mod route_tests {
        use hyper::Method;
        use crate::http::enums::route::Route;

        #[test]
        fn test_route_resolution() {
            let get = Method::GET;
            assert_eq!(Route::resolve(&get, "/"), Route::Index);
            assert_eq!(Route::resolve(&get, "/index.html"), Route::Index);
            assert_eq!(Route::resolve(&get, "/search.json"), Route::Search);
            assert_eq!(Route::resolve(&get, "/dataclasses.html"), Route::Module(String::from("dataclasses")));
            assert_eq!(Route::resolve(&get, "/markupsafe/escape.html"), Route::Module(String::from("markupsafe.escape")));
            assert_eq!(Route::resolve(&Method::HEAD, "/a.b.html"), Route::Module(String::from("a.b")));
            assert_eq!(Route::resolve(&get, "/.html"), Route::NotFound);
            assert_eq!(Route::resolve(&get, "/search"), Route::NotFound);
            assert_eq!(Route::resolve(&get, "/style.css"), Route::NotFound);
        }

        #[test]
        fn test_route_other_methods() {
            let post = Method::POST;
            assert_eq!(Route::resolve(&post, "/"), Route::NotFound);
            assert_eq!(Route::resolve(&post, "/dataclasses.html"), Route::NotFound);
        }
    }

    mod response_tests {
        use hyper::StatusCode;
        use hyper::header::{CONNECTION, CONTENT_LENGTH, CONTENT_TYPE, SERVER};
        use http_body_util::BodyExt;
        use crate::http::impls::http_response::{CONTENT_TYPE_HTML, CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT};
        use crate::http::structs::http_response::HttpResponse;

        #[tokio::test]
        async fn test_response_headers() {
            let response = HttpResponse::html(String::from("<p>hi</p>")).into_response(false);
            assert_eq!(response.status(), StatusCode::OK);
            let headers = response.headers();
            assert_eq!(headers[CONTENT_TYPE], CONTENT_TYPE_HTML);
            assert_eq!(headers[CONTENT_LENGTH], "9");
            assert_eq!(headers[CONNECTION], "close");
            assert_eq!(headers[SERVER], format!("docserver/{}", env!("CARGO_PKG_VERSION")).as_str());
            let body = response.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(&body[..], b"<p>hi</p>");
        }

        #[tokio::test]
        async fn test_head_only_keeps_length() {
            let response = HttpResponse::json(b"{\"a\":1}".to_vec()).into_response(true);
            assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_JSON);
            assert_eq!(response.headers()[CONTENT_LENGTH], "7");
            let body = response.into_body().collect().await.unwrap().to_bytes();
            assert!(body.is_empty());
        }

        #[test]
        fn test_error_responses() {
            let response = HttpResponse::error(StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE);
            assert_eq!(response.content_type, CONTENT_TYPE_TEXT);
            assert_eq!(&response.body[..], b"431 Request Header Fields Too Large\n");
            let response = HttpResponse::not_found("/nope");
            assert_eq!(response.status, StatusCode::NOT_FOUND);
            assert!(String::from_utf8_lossy(&response.body).contains("404 Not Found"));
        }

        #[test]
        fn test_rejection_bytes() {
            let bytes = HttpResponse::error(StatusCode::HTTP_VERSION_NOT_SUPPORTED).to_bytes();
            let text = String::from_utf8(bytes).unwrap();
            assert!(text.starts_with("HTTP/1.1 505 HTTP Version Not Supported\r\n"));
            assert!(text.contains("content-length: 31\r\n"));
            assert!(text.contains("connection: close\r\n"));
            assert!(text.ends_with("\r\n\r\n505 HTTP Version Not Supported\n"));
        }
    }

    mod handler_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use crate::catalog::structs::diagnostics::Diagnostics;
        use crate::catalog::tests::catalog_tests::MemorySource;
        use crate::http::enums::request_error::RequestError;
        use crate::http::structs::doc_handler::DocHandler;
        use crate::http::structs::doc_server::DocServer;

        fn server() -> DocServer {
            let source = MemorySource::new(&[("dataclasses", false), ("markupsafe", true), ("markupsafe.escape", false)]);
            let roots = vec![String::from("dataclasses"), String::from("markupsafe"), String::from("err")];
            DocServer::new(&roots, Arc::new(source), &mut Diagnostics::new())
        }

        async fn exchange(server: DocServer, request: &[u8], close_after_write: bool) -> (String, Result<Diagnostics, RequestError>) {
            let handler = DocHandler::new(Arc::new(server), "127.0.0.1:50000".parse().unwrap());
            let (mut client, stream) = tokio::io::duplex(512);
            let client_side = async move {
                client.write_all(request).await.unwrap();
                if close_after_write {
                    client.shutdown().await.unwrap();
                }
                let mut output = Vec::new();
                client.read_to_end(&mut output).await.unwrap();
                String::from_utf8(output).unwrap()
            };
            tokio::join!(client_side, handler.handle(stream))
        }

        #[tokio::test]
        async fn test_handler_serves_index() {
            let (output, result) = exchange(server(), b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n", false).await;
            assert!(output.starts_with("HTTP/1.1 200 OK\r\n"));
            assert!(output.contains("<a href=\"dataclasses.html\">"));
            assert!(result.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_handler_failing_page() {
            let (output, result) = exchange(server(), b"GET /err.html?mtime HTTP/1.1\r\n\r\n", false).await;
            assert!(output.starts_with("HTTP/1.1 200 OK\r\n"));
            assert!(output.contains("ModuleNotFoundError"));
            assert!(output.ends_with("\n0"));
            assert_eq!(result.unwrap().for_module("err").len(), 1);
        }

        #[tokio::test]
        async fn test_handler_mtime_line() {
            let (output, _) = exchange(server(), b"GET /markupsafe/escape.html?mtime=1 HTTP/1.1\r\n\r\n", false).await;
            assert_eq!(output.lines().last(), Some("1.5"));
        }

        #[tokio::test]
        async fn test_handler_unknown_module() {
            let (output, _) = exchange(server(), b"GET /typing.html HTTP/1.1\r\n\r\n", false).await;
            assert!(output.starts_with("HTTP/1.1 404 Not Found\r\n"));
            assert!(output.contains("404 Not Found\n"));
        }

        #[tokio::test]
        async fn test_handler_rejects_malformed() {
            let (output, result) = exchange(server(), b"NONSENSE\r\n\r\n", false).await;
            assert!(output.starts_with("HTTP/1.1 400 Bad Request\r\n"));
            assert!(result.is_ok());

            let (output, result) = exchange(server(), b"GET / HTTP/1.1\r\nno colon here\r\n\r\n", false).await;
            assert!(output.starts_with("HTTP/1.1 400 Bad Request\r\n"));
            assert!(result.is_ok());
        }

        #[tokio::test]
        async fn test_handler_rejects_undecodable_path() {
            let (output, _) = exchange(server(), b"GET /%ff.html HTTP/1.1\r\n\r\n", false).await;
            assert!(output.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        }

        #[tokio::test]
        async fn test_handler_unsupported_version() {
            let (output, result) = exchange(server(), b"GET / HTTP/2.0\r\n\r\n", false).await;
            assert!(output.starts_with("HTTP/1.1 505 HTTP Version Not Supported\r\n"));
            assert!(result.is_ok());
        }

        #[tokio::test]
        async fn test_handler_head_request() {
            let (output, _) = exchange(server(), b"HEAD / HTTP/1.1\r\n\r\n", false).await;
            assert!(output.starts_with("HTTP/1.1 200 OK\r\n"));
            assert!(output.ends_with("\r\n\r\n"));
            assert!(!output.contains("<a href"));
        }

        #[tokio::test]
        async fn test_handler_answers_after_half_close() {
            let (output, result) = exchange(server(), b"GET /dataclasses.html HTTP/1.1\r\n", true).await;
            assert!(output.starts_with("HTTP/1.1 200 OK\r\n"));
            assert!(result.is_ok());
        }

        #[tokio::test]
        async fn test_handler_closed_without_request() {
            let (output, result) = exchange(server(), b"", true).await;
            assert!(output.is_empty());
            assert!(matches!(result, Err(RequestError::ConnectionClosed)));
        }

        #[tokio::test]
        async fn test_handler_times_out() {
            let server = server().with_request_timeout(Some(Duration::from_millis(50)));
            let (output, result) = exchange(server, b"GET / HTTP/1.1\r\n", false).await;
            assert!(output.starts_with("HTTP/1.1 408 Request Timeout\r\n"));
            assert!(result.is_ok());
        }

        #[tokio::test]
        async fn test_handler_header_limit() {
            let server = server().with_max_header_size(64);
            let request = format!("GET / HTTP/1.1\r\nCookie: {}\r\n\r\n", "c".repeat(128));
            let (output, _) = exchange(server, request.as_bytes(), false).await;
            assert!(output.starts_with("HTTP/1.1 431 Request Header Fields Too Large\r\n"));
        }
    }
}
