use tracing::debug;

use crate::embedding::{EncoderConfig, SentenceEncoder};

use super::TextSimilarity;
use super::error::ScoringError;

/// Scores two texts by cosine similarity of their sentence embeddings.
pub struct SimilarityScorer {
    encoder: SentenceEncoder,
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("encoder", &self.encoder)
            .finish()
    }
}

impl SimilarityScorer {
    pub fn new(config: EncoderConfig) -> Result<Self, ScoringError> {
        let encoder = SentenceEncoder::load(config)?;
        Ok(Self { encoder })
    }

    pub fn stub() -> Result<Self, ScoringError> {
        Ok(Self {
            encoder: SentenceEncoder::stub()?,
        })
    }

    pub fn from_encoder(encoder: SentenceEncoder) -> Self {
        Self { encoder }
    }

    pub fn is_model_loaded(&self) -> bool {
        self.encoder.has_model()
    }

    pub fn encoder(&self) -> &SentenceEncoder {
        &self.encoder
    }

    /// Embeds one text. Called once per input per check; no caching.
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, ScoringError> {
        Ok(self.encoder.embed(text)?)
    }
}

impl TextSimilarity for SimilarityScorer {
    fn similarity(&self, a: &str, b: &str) -> Result<f32, ScoringError> {
        if a.trim().is_empty() || b.trim().is_empty() {
            return Err(ScoringError::InvalidInput {
                reason: "similarity inputs must be non-empty".to_string(),
            });
        }

        let embedding_a = self.embed(a)?;
        let embedding_b = self.embed(b)?;

        let score = cosine_similarity(&embedding_a, &embedding_b);

        debug!(
            a_len = a.len(),
            b_len = b.len(),
            score = score,
            "Computed semantic similarity"
        );

        Ok(score)
    }
}

/// Cosine similarity of two f32 vectors (0.0 on mismatched or empty inputs).
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
