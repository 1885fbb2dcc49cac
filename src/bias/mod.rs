//! Bias detection for generated summaries.
//!
//! A summary is considered "biased" when it drifts semantically from the
//! video title it claims to summarize, approximated by low cosine similarity
//! between the two. This is topical-drift detection, not fairness bias.
//!
//! [`BiasMonitor`] is constructed once at composition time (model load is
//! expensive) and shared for the process lifetime. The threshold is the only
//! mutable state; reads and updates go through a read-write lock.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::BiasError;
pub use types::{BiasCheckResult, BiasOutcome, SummaryKind};

use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::constants::contains_placeholder;
use crate::embedding::EncoderConfig;
use crate::scoring::{SimilarityScorer, TextSimilarity};

/// Detects topical drift between a video title and a generated summary.
pub struct BiasMonitor<S = SimilarityScorer> {
    model_name: String,
    threshold: RwLock<f32>,
    scorer: S,
}

impl BiasMonitor<SimilarityScorer> {
    /// Builds a monitor backed by the sentence encoder described in `config`.
    pub fn new(config: EncoderConfig, initial_threshold: f32) -> Result<Self, BiasError> {
        let model_name = if config.testing_stub {
            "stub".to_string()
        } else {
            config.model_path.display().to_string()
        };

        info!(
            model = %model_name,
            threshold = initial_threshold,
            "Initializing bias monitor"
        );

        let scorer = SimilarityScorer::new(config)?;
        Self::with_scorer(model_name, scorer, initial_threshold)
    }

    /// Builds a monitor over the deterministic stub encoder.
    pub fn stub(initial_threshold: f32) -> Result<Self, BiasError> {
        Self::with_scorer("stub".to_string(), SimilarityScorer::stub()?, initial_threshold)
    }
}

impl<S: TextSimilarity> BiasMonitor<S> {
    /// Builds a monitor over an already-constructed scorer.
    pub fn with_scorer(
        model_name: String,
        scorer: S,
        initial_threshold: f32,
    ) -> Result<Self, BiasError> {
        if !(0.0..=1.0).contains(&initial_threshold) {
            return Err(BiasError::InvalidThreshold {
                value: initial_threshold,
            });
        }

        Ok(Self {
            model_name,
            threshold: RwLock::new(initial_threshold),
            scorer,
        })
    }

    /// Checks whether `summary` drifted from `title`.
    ///
    /// Never fails: scorer errors are folded into an `Errored` result with
    /// `is_biased = true` (fail closed). Blank titles and placeholder
    /// summaries short-circuit before the embedding backend is touched.
    pub fn check_bias(&self, title: &str, summary: &str, kind: SummaryKind) -> BiasCheckResult {
        let threshold = *self.threshold.read();

        if title.trim().is_empty() {
            warn!(kind = %kind, "Empty title provided, skipping bias check");
            return BiasCheckResult::skipped(threshold, "empty title");
        }

        if summary.trim().is_empty() {
            warn!(kind = %kind, "Empty summary provided, marking as biased");
            return BiasCheckResult::errored(title, summary, threshold, "empty summary");
        }

        if contains_placeholder(summary) {
            info!(kind = %kind, "Placeholder message detected, skipping bias check");
            return BiasCheckResult::skipped(threshold, "placeholder message");
        }

        debug!(kind = %kind, "Scoring title/summary similarity");

        match self.scorer.similarity(title, summary) {
            Ok(score) => {
                let result = BiasCheckResult::scored(title, summary, score, threshold);

                info!(
                    kind = %kind,
                    score = score,
                    threshold = threshold,
                    biased = result.is_biased,
                    "Bias check scored"
                );

                result
            }
            Err(e) => {
                error!(kind = %kind, error = %e, "Bias check failed, failing closed");
                BiasCheckResult::errored(title, summary, threshold, &e.to_string())
            }
        }
    }

    /// Returns the threshold currently in effect.
    pub fn threshold(&self) -> f32 {
        *self.threshold.read()
    }

    /// Sets a new threshold after validating `0 <= t <= 1`.
    ///
    /// On rejection the old threshold stays active.
    pub fn update_threshold(&self, new_threshold: f32) -> Result<(), BiasError> {
        if !(0.0..=1.0).contains(&new_threshold) {
            return Err(BiasError::InvalidThreshold {
                value: new_threshold,
            });
        }

        let mut threshold = self.threshold.write();
        info!(
            old = *threshold,
            new = new_threshold,
            "Updating bias threshold"
        );
        *threshold = new_threshold;

        Ok(())
    }

    /// Identifier of the embedding model backing this monitor.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Access to the underlying scorer (used by tests to inspect call counts).
    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}

impl<S> std::fmt::Debug for BiasMonitor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BiasMonitor")
            .field("model_name", &self.model_name)
            .field("threshold", &*self.threshold.read())
            .finish()
    }
}
