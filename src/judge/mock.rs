//! Scripted judge backend for tests and offline runs.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::judge::error::JudgeError;
use crate::judge::types::{JudgeCriteria, RawJudgement};
use crate::judge::JudgeBackend;

#[derive(Clone)]
enum MockJudgement {
    Score(f32),
    Fail(String),
}

/// Returns queued judgements in order; once the queue is drained it repeats
/// the last configured judgement.
pub struct MockJudgeBackend {
    script: Mutex<VecDeque<MockJudgement>>,
    fallback: MockJudgement,
    calls: AtomicUsize,
}

impl MockJudgeBackend {
    pub fn always(score: f32) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: MockJudgement::Score(score),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn scripted(scores: &[f32]) -> Self {
        let fallback = scores
            .last()
            .map(|s| MockJudgement::Score(*s))
            .unwrap_or(MockJudgement::Score(0.0));
        Self {
            script: Mutex::new(scores.iter().map(|s| MockJudgement::Score(*s)).collect()),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: MockJudgement::Fail(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JudgeBackend for MockJudgeBackend {
    async fn judge_text(
        &self,
        _criteria: &JudgeCriteria,
        _source: &str,
        _summary: &str,
    ) -> Result<RawJudgement, JudgeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        match next {
            MockJudgement::Score(score) => Ok(RawJudgement {
                score,
                reason: format!("mock judgement with score {score}"),
            }),
            MockJudgement::Fail(reason) => Err(JudgeError::Provider { message: reason }),
        }
    }
}
