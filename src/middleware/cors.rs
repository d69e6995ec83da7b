use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// The admin UI may be served from a dev server on another origin.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
