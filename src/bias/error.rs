use thiserror::Error;

use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum BiasError {
    /// Threshold outside [0, 1]. The previous threshold stays in effect.
    #[error("threshold must be between 0 and 1, got {value}")]
    InvalidThreshold { value: f32 },

    #[error("failed to initialize bias monitor: {0}")]
    Init(#[from] ScoringError),
}
