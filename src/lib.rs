//! VidSynth validation library crate (used by the server binary and
//! integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`SummaryValidator`], [`ValidationVerdict`], [`ValidationIssue`] -
//!   Structural summary validation
//! - [`BiasMonitor`], [`BiasCheckResult`] - Title/summary semantic drift
//!   detection
//!
//! ## Embedding & Scoring
//! - [`SentenceEncoder`], [`EncoderConfig`] - Sentence embedding generation
//! - [`SimilarityScorer`], [`TextSimilarity`], [`cosine_similarity`] -
//!   Similarity scoring
//!
//! ## Quality Judging
//! - [`QualityJudge`], [`JudgeBackend`], [`JudgeCriteria`] - LLM-as-judge
//!   scoring
//! - [`CorpusEvaluator`], [`CorpusReport`], [`RatePacer`] - Offline corpus
//!   evaluation
//!
//! ## Constants
//! Threshold and sizing defaults are exported from [`constants`] for
//! consistency across modules.
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod bias;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod embedding;
pub mod gateway;
pub mod judge;
pub mod scoring;
pub mod validator;

pub use bias::{BiasCheckResult, BiasError, BiasMonitor, BiasOutcome, SummaryKind};
pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_BIAS_THRESHOLD, DEFAULT_CORPUS_PASS_QUOTA, DEFAULT_EMBEDDING_DIM,
    DEFAULT_JUDGE_THRESHOLD, DEFAULT_MIN_SUMMARY_WORDS, PLACEHOLDER_MESSAGES,
    contains_placeholder,
};
pub use corpus::{CorpusError, CorpusEvaluator, CorpusReport, RatePacer, VideoCorpus, VideoRecord};
pub use embedding::{EmbeddingError, EncoderConfig, SentenceEncoder};
pub use gateway::{
    GatewayError, HandlerState, VIDSYNTH_STATUS_HEADER, ValidateRequest, ValidateResponse,
    create_router_with_state,
};
pub use judge::{
    JudgeBackend, JudgeCriteria, JudgeError, JudgeVerdict, LlmJudgeBackend, QualityJudge,
    RawJudgement,
};
pub use scoring::{ScoringError, SimilarityScorer, TextSimilarity, cosine_similarity};
pub use validator::{
    SummaryCheckRequest, SummaryField, SummaryValidator, ValidationIssue, ValidationVerdict,
    ValidatorConfig,
};

#[cfg(any(test, feature = "mock"))]
pub use judge::mock::MockJudgeBackend;
#[cfg(any(test, feature = "mock"))]
pub use scoring::MockScorer;
