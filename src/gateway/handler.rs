use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{debug, info};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{
    ThresholdUpdateRequest, ThresholdUpdateResponse, VIDSYNTH_STATUS_HEADER,
    VIDSYNTH_STATUS_VALIDATED, ValidateRequest, ValidateResponse,
};
use crate::gateway::state::HandlerState;
use crate::scoring::TextSimilarity;

/// `POST /validate` — runs the full structural and bias pipeline over one
/// record's summaries.
///
/// Embedding inference is CPU-bound, so validation runs on the blocking pool
/// to keep the async workers responsive.
pub async fn handle_validate<S>(
    State(state): State<HandlerState<S>>,
    Json(payload): Json<ValidateRequest>,
) -> Result<impl IntoResponse, GatewayError>
where
    S: TextSimilarity + Send + Sync + 'static,
{
    debug!(video_id = %payload.video_id, "Validation request received");

    let validator = state.validator.clone();
    let check_request = payload.clone().into_check_request();
    let verdict = tokio::task::spawn_blocking(move || validator.validate(&check_request))
        .await
        .map_err(|e| GatewayError::Internal(format!("validation task failed: {e}")))?;

    let response = ValidateResponse::from_verdict(&payload, verdict);
    info!(
        video_id = %response.video_id,
        is_valid = response.is_valid,
        issues = response.issues.len(),
        "Validation complete"
    );

    Ok((
        StatusCode::OK,
        [(VIDSYNTH_STATUS_HEADER, VIDSYNTH_STATUS_VALIDATED)],
        Json(response),
    ))
}

/// `PUT /threshold` — adjusts the bias similarity threshold at runtime.
///
/// Out-of-range values are rejected with 400; the active threshold is never
/// clamped.
pub async fn handle_threshold_update<S>(
    State(state): State<HandlerState<S>>,
    Json(payload): Json<ThresholdUpdateRequest>,
) -> Result<impl IntoResponse, GatewayError>
where
    S: TextSimilarity + Send + Sync + 'static,
{
    let monitor = state
        .bias_monitor
        .as_ref()
        .ok_or(GatewayError::BiasMonitorUnavailable)?;

    monitor.update_threshold(payload.threshold)?;

    Ok(Json(ThresholdUpdateResponse {
        threshold: monitor.threshold(),
    }))
}
