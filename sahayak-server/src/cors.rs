use axum::http::{header, HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

const X_CLIENT_INFO: HeaderName = HeaderName::from_static("x-client-info");
const APIKEY: HeaderName = HeaderName::from_static("apikey");

/// Browser pages on any origin may call the functions.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, X_CLIENT_INFO, APIKEY, header::CONTENT_TYPE])
}
