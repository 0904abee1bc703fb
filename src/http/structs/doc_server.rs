use std::sync::Arc;
use std::time::Duration;
use crate::catalog::structs::module_catalog::ModuleCatalog;
use crate::catalog::traits::module_source::ModuleSource;

/// Everything a connection handler needs, shared read-only between connections.
///
/// Construction builds the catalog but never binds a socket; listening is
/// done separately by [`http_service`](crate::http::http::http_service).
#[derive(Clone)]
pub struct DocServer {
    pub(crate) catalog: ModuleCatalog,
    pub(crate) source: Arc<dyn ModuleSource>,
    pub(crate) request_timeout: Option<Duration>,
    pub(crate) max_header_size: usize,
}
