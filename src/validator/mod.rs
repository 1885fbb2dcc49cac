//! Summary validation: the decision gate combining structural checks and
//! bias detection into one verdict per record.
//!
//! Both summary fields are checked independently; issues accumulate, so a
//! record can fail on several counts at once. The monitor is injected at
//! composition time; `validate` itself never fails — every content problem
//! and dependency failure becomes an issue inside the returned verdict.

pub mod types;


pub use types::{SummaryCheckRequest, SummaryField, ValidationIssue, ValidationVerdict};

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::bias::BiasMonitor;
use crate::config::Config;
use crate::constants::{DEFAULT_MIN_SUMMARY_WORDS, contains_placeholder};
use crate::scoring::{SimilarityScorer, TextSimilarity};

/// Validation settings (a snapshot of the relevant [`Config`] fields).
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Minimum whitespace-delimited word count per summary.
    pub min_summary_words: usize,
    /// Whether bias detection runs at all.
    pub enable_bias_check: bool,
    /// Whether the comment summary is also bias-checked against the title.
    pub check_comment_bias: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_summary_words: DEFAULT_MIN_SUMMARY_WORDS,
            enable_bias_check: true,
            check_comment_bias: false,
        }
    }
}

impl From<&Config> for ValidatorConfig {
    fn from(config: &Config) -> Self {
        Self {
            min_summary_words: config.min_summary_words,
            enable_bias_check: config.enable_bias_check,
            check_comment_bias: config.check_comment_bias,
        }
    }
}

/// The top-level validation gate.
pub struct SummaryValidator<S = SimilarityScorer> {
    config: ValidatorConfig,
    bias_monitor: Option<Arc<BiasMonitor<S>>>,
}

impl<S: TextSimilarity> SummaryValidator<S> {
    /// Builds a validator. Pass `None` for the monitor when bias checking is
    /// disabled or the monitor failed to initialize; validation then records
    /// the inability to check instead of silently skipping.
    pub fn new(config: ValidatorConfig, bias_monitor: Option<Arc<BiasMonitor<S>>>) -> Self {
        Self {
            config,
            bias_monitor,
        }
    }

    /// Runs all checks for one record and aggregates the verdict.
    pub fn validate(&self, request: &SummaryCheckRequest) -> ValidationVerdict {
        info!(record_id = %request.record_id, "Starting validation");

        let mut issues = Vec::new();

        self.check_structure(SummaryField::Video, &request.video_summary, &mut issues);
        self.check_structure(SummaryField::Comment, &request.comment_summary, &mut issues);

        let bias_check = if self.config.enable_bias_check {
            self.run_bias_checks(request, &mut issues)
        } else {
            None
        };

        let verdict = ValidationVerdict::new(request.record_id.clone(), issues, bias_check);

        info!(
            record_id = %request.record_id,
            valid = verdict.is_valid,
            issues = verdict.issues.len(),
            "Validation complete"
        );

        verdict
    }

    /// Access to the injected bias monitor, if any.
    pub fn bias_monitor(&self) -> Option<&Arc<BiasMonitor<S>>> {
        self.bias_monitor.as_ref()
    }

    /// The settings this validator was built with.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn check_structure(
        &self,
        field: SummaryField,
        summary: &str,
        issues: &mut Vec<ValidationIssue>,
    ) {
        if summary.trim().is_empty() {
            issues.push(ValidationIssue::MissingSource { field });
            return;
        }

        if summary.contains(field.unavailable_marker()) || contains_placeholder(summary) {
            issues.push(ValidationIssue::SummaryIsPlaceholder { field });
            return;
        }

        let words = summary.split_whitespace().count();
        if words < self.config.min_summary_words {
            debug!(
                field = field.label(),
                words = words,
                minimum = self.config.min_summary_words,
                "Summary below word minimum"
            );
            issues.push(ValidationIssue::SummaryTooShort {
                field,
                words,
                minimum: self.config.min_summary_words,
            });
        }
    }

    fn run_bias_checks(
        &self,
        request: &SummaryCheckRequest,
        issues: &mut Vec<ValidationIssue>,
    ) -> Option<crate::bias::BiasCheckResult> {
        let title = match request.title.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(title) => title,
            None => {
                warn!(record_id = %request.record_id, "Bias check enabled but no title provided");
                issues.push(ValidationIssue::BiasCheckFailed {
                    reason: "video title not provided".to_string(),
                });
                return None;
            }
        };

        let monitor = match &self.bias_monitor {
            Some(monitor) => monitor,
            None => {
                warn!(record_id = %request.record_id, "Bias check enabled but monitor unavailable");
                issues.push(ValidationIssue::BiasCheckFailed {
                    reason: "bias monitor not available".to_string(),
                });
                return None;
            }
        };

        debug!(record_id = %request.record_id, title = %title, "Performing bias detection");

        let video_result = monitor.check_bias(title, &request.video_summary, SummaryField::Video.kind());
        if video_result.is_biased {
            warn!(
                record_id = %request.record_id,
                score = video_result.similarity_score,
                "Bias detected in video summary"
            );
            issues.push(ValidationIssue::BiasDetected {
                field: SummaryField::Video,
                score: video_result.similarity_score.unwrap_or(0.0),
                threshold: video_result.threshold,
            });
        }

        if self.config.check_comment_bias {
            let comment_result =
                monitor.check_bias(title, &request.comment_summary, SummaryField::Comment.kind());
            if comment_result.is_biased {
                warn!(
                    record_id = %request.record_id,
                    score = comment_result.similarity_score,
                    "Bias detected in comment summary"
                );
                issues.push(ValidationIssue::BiasDetected {
                    field: SummaryField::Comment,
                    score: comment_result.similarity_score.unwrap_or(0.0),
                    threshold: comment_result.threshold,
                });
            }
        }

        // The response detail always describes the video summary; the comment
        // check contributes issues only.
        Some(video_result)
    }
}

impl<S> std::fmt::Debug for SummaryValidator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryValidator")
            .field("config", &self.config)
            .field("has_bias_monitor", &self.bias_monitor.is_some())
            .finish()
    }
}
