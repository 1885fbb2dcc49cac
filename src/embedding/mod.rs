//! Sentence-embedding backend for semantic similarity scoring.
//!
//! - [`encoder`] provides embedding generation (model or deterministic stub).
//! - [`bert`] wraps the candle BERT forward pass with sentence pooling.

/// BERT sentence-encoder wrapper.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Sentence encoder (the embedding capability consumed by scoring).
pub mod encoder;
mod error;
/// Tokenizer loading helpers.
pub mod utils;

pub use encoder::{EncoderConfig, SentenceEncoder};
pub use error::EmbeddingError;
