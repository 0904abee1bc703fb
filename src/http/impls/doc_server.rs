use std::sync::Arc;
use std::time::Duration;
use bytes::Bytes;
use http_body_util::Full;
use hyper::{Method, Request, Response, StatusCode};
use log::error;
use percent_encoding::percent_decode_str;
use crate::common::common::parse_query;
use crate::catalog::structs::diagnostics::Diagnostics;
use crate::catalog::structs::module_catalog::ModuleCatalog;
use crate::catalog::traits::module_source::ModuleSource;
use crate::config::impls::http_server_config::DEFAULT_MAX_HEADER_SIZE;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::http::enums::route::Route;
use crate::http::structs::doc_server::DocServer;
use crate::http::structs::http_response::HttpResponse;
use crate::render::render::{render_import_error, render_index, render_module, render_search};

impl DocServer {
    /// Builds the catalog for `roots`; import failures go to `diagnostics`.
    pub fn new(roots: &[String], source: Arc<dyn ModuleSource>, diagnostics: &mut Diagnostics) -> DocServer {
        let catalog = ModuleCatalog::new(roots, source.as_ref(), diagnostics);
        DocServer {
            catalog,
            source,
            request_timeout: None,
            max_header_size: DEFAULT_MAX_HEADER_SIZE,
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Option<Duration>) -> DocServer {
        self.request_timeout = request_timeout;
        self
    }

    pub fn with_max_header_size(mut self, max_header_size: usize) -> DocServer {
        self.max_header_size = max_header_size;
        self
    }

    /// Applies the limits of one listener configuration.
    pub fn with_limits(self, config: &HttpServerConfig) -> DocServer {
        self.with_request_timeout(config.request_timeout())
            .with_max_header_size(config.max_header_size())
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    pub fn source(&self) -> &dyn ModuleSource {
        self.source.as_ref()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    pub fn max_header_size(&self) -> usize {
        self.max_header_size
    }

    /// Answers `request`. A `HEAD` response carries the headers of the
    /// matching `GET` and an empty body.
    pub fn respond<B>(&self, request: &Request<B>, diagnostics: &mut Diagnostics) -> Response<Full<Bytes>> {
        let head_only = request.method() == Method::HEAD;
        let uri = request.uri();
        let Ok(path) = percent_decode_str(uri.path()).decode_utf8() else {
            return HttpResponse::error(StatusCode::BAD_REQUEST).into_response(head_only);
        };
        let query = parse_query(uri.query().map(str::to_string));

        let response = match Route::resolve(request.method(), &path) {
            Route::Index => HttpResponse::html(render_index(&self.catalog)),
            Route::Search => match render_search(&self.catalog, self.source(), diagnostics) {
                Ok(body) => HttpResponse::json(body),
                Err(error) => {
                    error!("[HTTP] Unable to serialize the search index: {error}");
                    HttpResponse::error(StatusCode::INTERNAL_SERVER_ERROR)
                }
            },
            Route::Module(name) if self.catalog.contains(&name) => {
                HttpResponse::html(self.module_page(&name, query.contains_key("mtime"), diagnostics))
            }
            Route::Module(_) | Route::NotFound => HttpResponse::not_found(&path),
        };
        response.into_response(head_only)
    }

    /// Rendered page of a catalog member, or its import error page.
    ///
    /// With `mtime` the source modification time is appended as the final
    /// line, `0` when there is no source file.
    pub fn module_page(&self, name: &str, mtime: bool, diagnostics: &mut Diagnostics) -> String {
        let mut body = match self.source.load(name) {
            Ok(doc) => render_module(&doc, &self.catalog),
            Err(error) => {
                diagnostics.import_failed(&error);
                render_import_error(name, &error)
            }
        };
        if mtime {
            if !body.ends_with('\n') {
                body.push('\n');
            }
            body.push_str(&self.source.modified(name).unwrap_or(0.0).to_string());
        }
        body
    }
}
