use axum::{
    extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get, Router,
};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::cors::cors_layer;
use crate::state::AppState;

pub fn build_router(state: AppState, body_limit: usize) -> Router {
    let public_routes = Router::<AppState>::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/version", get(version_info));

    Router::<AppState>::new()
        .nest("/functions/v1", api::router())
        .merge(public_routes)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}

async fn version_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "cargo_version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
