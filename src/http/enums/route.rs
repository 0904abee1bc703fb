#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Search,
    /// Page of the named module, not yet checked against the catalog.
    Module(String),
    NotFound,
}
