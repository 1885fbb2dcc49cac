//! Mock similarity scorer for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::ScoringError;
use super::{TextSimilarity, cosine_similarity};
use crate::embedding::SentenceEncoder;

enum MockBehavior {
    Fixed(f32),
    Fail(String),
    Stub(SentenceEncoder),
}

/// Counts calls and returns a fixed score, a forced failure, or stub-encoder
/// similarity. The call counter lets tests assert the embedding backend was
/// never touched on skip paths.
pub struct MockScorer {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockScorer {
    /// Always returns `score`.
    pub fn fixed(score: f32) -> Self {
        Self {
            behavior: MockBehavior::Fixed(score),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with an inference-style error carrying `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Fail(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Scores with the deterministic stub encoder (token-overlap cosine).
    pub fn stub() -> Self {
        Self {
            behavior: MockBehavior::Stub(
                SentenceEncoder::stub().expect("stub encoder never fails to load"),
            ),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `similarity` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextSimilarity for MockScorer {
    fn similarity(&self, a: &str, b: &str) -> Result<f32, ScoringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Fixed(score) => Ok(*score),
            MockBehavior::Fail(reason) => Err(ScoringError::InvalidInput {
                reason: reason.clone(),
            }),
            MockBehavior::Stub(encoder) => {
                let ea = encoder.embed(a)?;
                let eb = encoder.embed(b)?;
                Ok(cosine_similarity(&ea, &eb))
            }
        }
    }
}
