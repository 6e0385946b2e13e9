use axum::{
    Router, http::StatusCode, middleware, response::IntoResponse, routing::get,
};
use tower_http::trace::TraceLayer;

use crate::{
    metrics::{metrics_handler, track_metrics},
    middleware::request_id_middleware,
    state::ApiState,
    topic,
};

/// All routes with their metrics, tracing and request id layers
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .merge(topic::routes())
        .fallback(handler_404)
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
