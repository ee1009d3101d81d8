//! Middleware de CORS

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// CORS permisivo para desarrollo; con orígenes configurados arma una
/// allow-list explícita
pub fn cors_middleware(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }

    let mut cors = CorsLayer::new();
    for origin in origins {
        if let Ok(header_value) = HeaderValue::from_str(origin) {
            cors = cors.allow_origin(header_value);
        }
    }

    cors.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([
        HeaderName::from_static("authorization"),
        HeaderName::from_static("content-type"),
        HeaderName::from_static("accept"),
    ])
    .allow_credentials(true)
    .max_age(std::time::Duration::from_secs(3600))
}
