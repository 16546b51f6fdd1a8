//! Request handling module
//!
//! Entry point for HTTP request processing: method validation, route table
//! lookup, and access logging. The handler is infallible; the only outcomes
//! are the fixed 200 bodies, 404, 405, and the OPTIONS response.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let version = version_str(req.version());

    let response = dispatch(&method, &path, &state.config.http);

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.http_version = version.to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        logger::log_access(&entry, &state.config.logging.format);
    }

    Ok(response)
}

/// Dispatch a request to a response based on method and path.
///
/// Kept free of `hyper::body::Incoming` so the full request/response mapping
/// is testable without a connection.
pub fn dispatch(method: &Method, path: &str, http_config: &crate::config::HttpConfig) -> Response<Full<Bytes>> {
    // 1. Method gate: only GET and HEAD reach the route table
    match *method {
        Method::GET | Method::HEAD => {}
        Method::OPTIONS => return http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            return http::build_405_response();
        }
    }

    let is_head = *method == Method::HEAD;

    // 2. Exact lookup in the static table
    match routing::lookup(path) {
        Some(body) => http::build_text_response(body, http_config, is_head),
        None => http::build_404_response(),
    }
}

fn version_str(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use http_body_util::BodyExt;

    fn test_http_config() -> HttpConfig {
        HttpConfig {
            default_content_type: "text/plain; charset=utf-8".to_string(),
            server_name: "greeter/0.1".to_string(),
        }
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_get_root() {
        let resp = dispatch(&Method::GET, "/", &test_http_config());
        assert_eq!(resp.status(), 200);
        assert_eq!(&body_bytes(resp).await[..], b"Hello!");
    }

    #[tokio::test]
    async fn test_get_bye() {
        let resp = dispatch(&Method::GET, "/bye/", &test_http_config());
        assert_eq!(resp.status(), 200);
        assert_eq!(&body_bytes(resp).await[..], b"Bye!");
    }

    #[test]
    fn test_get_unknown_is_404() {
        let resp = dispatch(&Method::GET, "/unknown", &test_http_config());
        assert_eq!(resp.status(), 404);
    }

    #[test]
    fn test_get_bye_without_trailing_slash_is_404() {
        // Exact-match table: no trailing-slash redirect.
        let resp = dispatch(&Method::GET, "/bye", &test_http_config());
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_byte_identical() {
        let first = body_bytes(dispatch(&Method::GET, "/", &test_http_config())).await;
        let second = body_bytes(dispatch(&Method::GET, "/", &test_http_config())).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_head_root() {
        let resp = dispatch(&Method::HEAD, "/", &test_http_config());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("Content-Length").unwrap(), "6");
        assert!(body_bytes(resp).await.is_empty());
    }

    #[test]
    fn test_post_is_405() {
        let resp = dispatch(&Method::POST, "/", &test_http_config());
        assert_eq!(resp.status(), 405);
    }

    #[test]
    fn test_options_is_204() {
        let resp = dispatch(&Method::OPTIONS, "/", &test_http_config());
        assert_eq!(resp.status(), 204);
    }
}
