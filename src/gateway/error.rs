use axum::Json;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::bias::BiasError;
use crate::gateway::payload::{VIDSYNTH_STATUS_ERROR, VIDSYNTH_STATUS_HEADER};

/// Handler-level failures. Malformed payloads never reach the handlers; the
/// `Json` extractor rejects them with its own 4xx response first.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error(transparent)]
    Threshold(#[from] BiasError),

    #[error("bias monitor is not configured")]
    BiasMonitorUnavailable,

    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Threshold(BiasError::InvalidThreshold { .. }) => StatusCode::BAD_REQUEST,
            GatewayError::Threshold(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::BiasMonitorUnavailable => StatusCode::CONFLICT,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        let mut response = (status, body).into_response();
        response.headers_mut().insert(
            VIDSYNTH_STATUS_HEADER,
            HeaderValue::from_static(VIDSYNTH_STATUS_ERROR),
        );
        response
    }
}
