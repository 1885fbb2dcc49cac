//! Semantic similarity scoring.
//!
//! [`SimilarityScorer`] embeds two strings with the
//! [`SentenceEncoder`](crate::embedding::SentenceEncoder) and computes their
//! cosine similarity. Consumers depend on the [`TextSimilarity`] trait so the
//! scorer can be swapped for a mock in tests.

pub mod error;
pub mod scorer;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::ScoringError;
pub use scorer::{SimilarityScorer, cosine_similarity};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockScorer;

/// Semantic closeness of two texts, as a cosine score.
///
/// Implementations must be deterministic for fixed inputs and must propagate
/// backend failures instead of returning a default score.
pub trait TextSimilarity {
    /// Scores `a` against `b`. Both inputs must be non-empty; callers filter
    /// empty strings upstream.
    fn similarity(&self, a: &str, b: &str) -> Result<f32, ScoringError>;
}
