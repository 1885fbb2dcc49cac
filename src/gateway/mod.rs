//! HTTP surface: a thin axum adapter over the validator core.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::scoring::TextSimilarity;

pub use error::GatewayError;
pub use payload::{
    BiasCheckPayload, ReadyResponse, ThresholdUpdateRequest, ThresholdUpdateResponse,
    VIDSYNTH_STATUS_ERROR, VIDSYNTH_STATUS_HEADER, VIDSYNTH_STATUS_HEALTHY,
    VIDSYNTH_STATUS_READY, VIDSYNTH_STATUS_VALIDATED, ValidateRequest, ValidateResponse,
};
pub use state::HandlerState;

pub fn create_router_with_state<S>(state: HandlerState<S>) -> Router
where
    S: TextSimilarity + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(health_check))
        .route("/ready", get(ready_check::<S>))
        .route("/validate", post(handler::handle_validate::<S>))
        .route("/threshold", put(handler::handle_threshold_update::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(VIDSYNTH_STATUS_HEADER, VIDSYNTH_STATUS_HEALTHY)],
        Json(json!({ "status": "ok" })),
    )
}

/// Reports whether bias checking is active and which embedder backs it.
async fn ready_check<S>(State(state): State<HandlerState<S>>) -> impl IntoResponse
where
    S: TextSimilarity + Send + Sync + 'static,
{
    let body = ReadyResponse {
        status: "ready".to_string(),
        bias_check_enabled: state.bias_monitor.is_some(),
        embedder: state.embedder_mode.clone(),
    };
    (
        StatusCode::OK,
        [(VIDSYNTH_STATUS_HEADER, VIDSYNTH_STATUS_READY)],
        Json(body),
    )
}
