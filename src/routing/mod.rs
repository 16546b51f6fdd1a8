//! Static route table
//!
//! The entire routing surface of the server: a fixed table mapping request
//! paths to constant response bodies. Built at compile time, never mutated.

/// A single (path, body) pair in the static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub body: &'static str,
}

/// The full route table. Matching is exact, so `/bye` and `/bye/` are
/// distinct paths.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        body: "Hello!",
    },
    Route {
        path: "/bye/",
        body: "Bye!",
    },
];

/// Find the response body for a request path.
///
/// Exact match only. No prefix matching, no trailing-slash normalization,
/// no redirects.
pub fn lookup(path: &str) -> Option<&'static str> {
    ROUTES.iter().find(|route| route.path == path).map(|route| route.body)
}
