use std::sync::Arc;

use crate::bias::BiasMonitor;
use crate::scoring::{SimilarityScorer, TextSimilarity};
use crate::validator::SummaryValidator;

/// Shared state handed to every gateway handler.
pub struct HandlerState<S: TextSimilarity = SimilarityScorer> {
    pub validator: Arc<SummaryValidator<S>>,
    pub bias_monitor: Option<Arc<BiasMonitor<S>>>,
    /// How titles and summaries are embedded ("model", "stub" or "disabled"),
    /// surfaced by the readiness endpoint.
    pub embedder_mode: String,
}

impl<S: TextSimilarity> HandlerState<S> {
    pub fn new(
        validator: Arc<SummaryValidator<S>>,
        bias_monitor: Option<Arc<BiasMonitor<S>>>,
        embedder_mode: impl Into<String>,
    ) -> Self {
        Self {
            validator,
            bias_monitor,
            embedder_mode: embedder_mode.into(),
        }
    }
}

impl<S: TextSimilarity> Clone for HandlerState<S> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            bias_monitor: self.bias_monitor.clone(),
            embedder_mode: self.embedder_mode.clone(),
        }
    }
}
