use thiserror::Error;

/// Errors raised while obtaining or interpreting an LLM quality judgement.
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("judge provider request failed: {message}")]
    Provider { message: String },

    #[error("judge returned an empty response")]
    EmptyResponse,

    #[error("could not parse judgement from response: {snippet}")]
    MalformedResponse { snippet: String },

    #[error("judge score {value} is outside [0.0, 1.0]")]
    ScoreOutOfRange { value: f32 },
}
