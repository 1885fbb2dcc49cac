use serde::Deserialize;

use crate::judge::error::JudgeError;

/// What a summary is being judged as, and the score it must reach.
#[derive(Debug, Clone)]
pub struct JudgeCriteria {
    /// Human-readable label for the summary kind, used in prompts and logs
    /// (e.g. "transcript summary", "comment summary").
    pub name: String,
    /// Minimum score for the summary to count as passing.
    pub threshold: f32,
}

impl JudgeCriteria {
    pub fn new(name: impl Into<String>, threshold: f32) -> Self {
        Self {
            name: name.into(),
            threshold,
        }
    }
}

/// The judgement as returned by a backend, before threshold application.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawJudgement {
    pub score: f32,
    #[serde(default)]
    pub reason: String,
}

/// A raw judgement combined with the criteria's pass/fail decision.
#[derive(Debug, Clone, PartialEq)]
pub struct JudgeVerdict {
    pub score: f32,
    pub reason: String,
    pub passed: bool,
}

/// Extracts a `RawJudgement` from LLM response text.
///
/// Models are instructed to reply with a bare JSON object but frequently wrap
/// it in prose or a code fence, so after a direct parse fails we retry on the
/// outermost `{ ... }` span of the text.
pub(crate) fn parse_judgement(text: &str) -> Result<RawJudgement, JudgeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(JudgeError::EmptyResponse);
    }

    let parsed = serde_json::from_str::<RawJudgement>(trimmed).or_else(|_| {
        let start = trimmed.find('{');
        let end = trimmed.rfind('}');
        match (start, end) {
            (Some(s), Some(e)) if s < e => serde_json::from_str::<RawJudgement>(&trimmed[s..=e]),
            _ => serde_json::from_str::<RawJudgement>(trimmed),
        }
    });

    let judgement = parsed.map_err(|_| JudgeError::MalformedResponse {
        snippet: snippet(trimmed),
    })?;

    if !judgement.score.is_finite() || !(0.0..=1.0).contains(&judgement.score) {
        return Err(JudgeError::ScoreOutOfRange {
            value: judgement.score,
        });
    }

    Ok(judgement)
}

const SNIPPET_CHARS: usize = 120;

fn snippet(text: &str) -> String {
    let mut out: String = text.chars().take(SNIPPET_CHARS).collect();
    if text.chars().count() > SNIPPET_CHARS {
        out.push_str("...");
    }
    out
}
