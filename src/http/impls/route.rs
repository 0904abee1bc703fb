use hyper::Method;
use crate::http::enums::route::Route;

const PAGE_SUFFIX: &str = ".html";

impl Route {
    /// Maps a decoded request path to a route.
    ///
    /// `/a/b.html` and `/a.b.html` both address module `a.b`. Only `GET` and
    /// `HEAD` are routed, any other method ends up at [`Route::NotFound`].
    pub fn resolve(method: &Method, path: &str) -> Route {
        if *method != Method::GET && *method != Method::HEAD {
            return Route::NotFound;
        }
        match path {
            "/" | "/index.html" => Route::Index,
            "/search.json" => Route::Search,
            _ => {
                let Some(name) = path.strip_prefix('/').and_then(|rest| rest.strip_suffix(PAGE_SUFFIX)) else {
                    return Route::NotFound;
                };
                if name.is_empty() {
                    return Route::NotFound;
                }
                Route::Module(name.replace('/', "."))
            }
        }
    }
}
