//! Wire types for the validation gateway.

use serde::{Deserialize, Serialize};

use crate::bias::BiasCheckResult;
use crate::validator::{SummaryCheckRequest, ValidationVerdict};

pub const VIDSYNTH_STATUS_HEADER: &str = "X-Vidsynth-Status";
pub const VIDSYNTH_STATUS_HEALTHY: &str = "healthy";
pub const VIDSYNTH_STATUS_READY: &str = "ready";
pub const VIDSYNTH_STATUS_VALIDATED: &str = "validated";
pub const VIDSYNTH_STATUS_ERROR: &str = "error";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub video_id: String,
    pub video_summary: String,
    pub comment_summary: String,
    #[serde(default)]
    pub video_title: Option<String>,
}

impl ValidateRequest {
    pub fn into_check_request(self) -> SummaryCheckRequest {
        SummaryCheckRequest {
            record_id: self.video_id,
            title: self.video_title,
            video_summary: self.video_summary,
            comment_summary: self.comment_summary,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasCheckPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f32>,
    pub is_biased: bool,
    pub threshold: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_title: Option<String>,
}

impl From<BiasCheckResult> for BiasCheckPayload {
    fn from(result: BiasCheckResult) -> Self {
        Self {
            similarity_score: result.similarity_score,
            is_biased: result.is_biased,
            threshold: result.threshold,
            summary_preview: result.summary_preview,
            video_title: result.title,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub video_id: String,
    pub video_summary: String,
    pub comment_summary: String,
    pub is_valid: bool,
    pub issues: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias_check: Option<BiasCheckPayload>,
}

impl ValidateResponse {
    /// Echoes the request's summaries back alongside the verdict, matching
    /// the shape downstream pipeline stages consume.
    pub fn from_verdict(request: &ValidateRequest, verdict: ValidationVerdict) -> Self {
        Self {
            video_id: verdict.record_id,
            video_summary: request.video_summary.clone(),
            comment_summary: request.comment_summary.clone(),
            is_valid: verdict.is_valid,
            issues: verdict
                .issues
                .iter()
                .map(|issue| issue.to_string())
                .collect(),
            bias_check: verdict.bias_check.map(BiasCheckPayload::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdUpdateRequest {
    pub threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdUpdateResponse {
    pub threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub bias_check_enabled: bool,
    pub embedder: String,
}
