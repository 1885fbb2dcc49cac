//! LLM-as-judge scoring of generated summaries against their source text.
//!
//! The seam is [`JudgeBackend`]: [`LlmJudgeBackend`] talks to a provider via
//! `genai`, while tests script judgements through `MockJudgeBackend`.
//! [`QualityJudge`] turns raw judgements into pass/fail verdicts for a given
//! [`JudgeCriteria`].

pub mod error;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatRequest};
use tracing::debug;

pub use error::JudgeError;
pub use types::{JudgeCriteria, JudgeVerdict, RawJudgement};

use types::parse_judgement;

const SYSTEM_PROMPT: &str = "You are a strict evaluator of machine-generated summaries. \
     Given a source text and a summary of it, rate how faithfully and completely the summary \
     represents the source. Respond with ONLY a JSON object of the form \
     {\"score\": <number between 0.0 and 1.0>, \"reason\": \"<one sentence justification>\"}.";

/// Produces a raw 0-1 judgement for a (source, summary) pair.
#[async_trait]
pub trait JudgeBackend: Send + Sync {
    async fn judge_text(
        &self,
        criteria: &JudgeCriteria,
        source: &str,
        summary: &str,
    ) -> Result<RawJudgement, JudgeError>;
}

/// Backend that asks a chat model for the judgement.
///
/// Provider selection and credentials are resolved by `genai` from the
/// environment based on the model name.
pub struct LlmJudgeBackend {
    client: Client,
    model: String,
}

impl LlmJudgeBackend {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::default(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl JudgeBackend for LlmJudgeBackend {
    async fn judge_text(
        &self,
        criteria: &JudgeCriteria,
        source: &str,
        summary: &str,
    ) -> Result<RawJudgement, JudgeError> {
        let user_prompt = format!(
            "Evaluate the following {kind}.\n\nSOURCE:\n{source}\n\nSUMMARY:\n{summary}",
            kind = criteria.name,
        );

        let request = ChatRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_prompt),
        ]);

        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| JudgeError::Provider {
                message: e.to_string(),
            })?;

        let text = response.first_text().ok_or(JudgeError::EmptyResponse)?;
        parse_judgement(text)
    }
}

/// Applies a [`JudgeCriteria`] threshold on top of a backend's raw judgement.
pub struct QualityJudge<B: JudgeBackend = LlmJudgeBackend> {
    backend: B,
}

impl QualityJudge<LlmJudgeBackend> {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            backend: LlmJudgeBackend::new(model),
        }
    }
}

impl<B: JudgeBackend> QualityJudge<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Judges `summary` against `source`, passing iff the score reaches the
    /// criteria's threshold.
    pub async fn judge(
        &self,
        criteria: &JudgeCriteria,
        source: &str,
        summary: &str,
    ) -> Result<JudgeVerdict, JudgeError> {
        let raw = self.backend.judge_text(criteria, source, summary).await?;
        let passed = raw.score >= criteria.threshold;

        debug!(
            criteria = %criteria.name,
            score = raw.score,
            threshold = criteria.threshold,
            passed,
            "Summary judged"
        );

        Ok(JudgeVerdict {
            score: raw.score,
            reason: raw.reason,
            passed,
        })
    }
}
