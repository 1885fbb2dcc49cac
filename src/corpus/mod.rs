//! Offline evaluation of a summary corpus with an LLM judge.
//!
//! Works through a `videoList.json` file record by record, judging the
//! transcript summary against the transcript and the comment summary against
//! the pooled comments. Scores are written back to the file after every
//! record, so an interrupted run resumes where it stopped. The final
//! [`CorpusReport`] carries the pass quota that gates model promotion.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::time::Duration;

use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{error, info, warn};

use crate::judge::{JudgeBackend, JudgeCriteria, JudgeVerdict, LlmJudgeBackend, QualityJudge};

pub use error::CorpusError;
pub use types::{VideoCorpus, VideoRecord};

/// Spaces out judge calls so provider rate limits are respected.
///
/// Backed by a tokio interval rather than fixed sleeps, so time spent waiting
/// on the judge itself counts toward the gap.
pub struct RatePacer {
    ticker: Interval,
}

impl RatePacer {
    pub fn new(period: Duration) -> Self {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { ticker }
    }

    pub async fn wait(&mut self) {
        self.ticker.tick().await;
    }
}

/// Tally of judged summaries across a corpus run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusReport {
    /// Summaries examined (two per fully-populated record).
    pub checks: usize,
    /// Summaries whose score reached the judge threshold.
    pub passed: usize,
    /// Passing summaries required to promote the model.
    pub quota: usize,
}

impl CorpusReport {
    fn new(quota: usize) -> Self {
        Self {
            checks: 0,
            passed: 0,
            quota,
        }
    }

    /// Whether the evaluated model cleared the promotion gate.
    pub fn promoted(&self) -> bool {
        self.passed >= self.quota
    }

    fn tally(&mut self, score: f32, threshold: f32) {
        self.checks += 1;
        if score >= threshold {
            self.passed += 1;
        }
    }
}

/// Runs a [`QualityJudge`] over every record of a corpus file.
pub struct CorpusEvaluator<B: JudgeBackend = LlmJudgeBackend> {
    judge: QualityJudge<B>,
    transcript_criteria: JudgeCriteria,
    comment_criteria: JudgeCriteria,
    pass_quota: usize,
}

impl<B: JudgeBackend> CorpusEvaluator<B> {
    pub fn new(judge: QualityJudge<B>, threshold: f32, pass_quota: usize) -> Self {
        Self {
            judge,
            transcript_criteria: JudgeCriteria::new("transcript summary", threshold),
            comment_criteria: JudgeCriteria::new("comment summary", threshold),
            pass_quota,
        }
    }

    /// Evaluates the corpus at `path` in place, saving after each record.
    ///
    /// Records that already carry eval scores are tallied without re-judging,
    /// which is what makes an interrupted run resumable.
    pub async fn evaluate(
        &self,
        path: &Path,
        pacer: &mut RatePacer,
    ) -> Result<CorpusReport, CorpusError> {
        let mut corpus = VideoCorpus::load(path)?;
        let mut report = CorpusReport::new(self.pass_quota);

        info!(
            path = %path.display(),
            records = corpus.video_list.len(),
            "Starting corpus evaluation"
        );

        for i in 0..corpus.video_list.len() {
            let record = &mut corpus.video_list[i];
            let needs_judging =
                record.trans_eval_score.is_none() || record.comment_eval_score.is_none();
            if needs_judging {
                pacer.wait().await;
                self.evaluate_record(record).await;
                corpus.save(path)?;
            }

            let record = &corpus.video_list[i];
            report.tally(
                record.trans_eval_score.unwrap_or(0.0),
                self.transcript_criteria.threshold,
            );
            report.tally(
                record.comment_eval_score.unwrap_or(0.0),
                self.comment_criteria.threshold,
            );
        }

        corpus.save(path)?;

        info!(
            checks = report.checks,
            passed = report.passed,
            quota = report.quota,
            promoted = report.promoted(),
            "Corpus evaluation finished"
        );

        Ok(report)
    }

    async fn evaluate_record(&self, record: &mut VideoRecord) {
        if record.trans_eval_score.is_none() {
            let verdict = self
                .judge_or_zero(
                    &self.transcript_criteria,
                    record.transcript.as_deref(),
                    record.trans_summary.as_deref(),
                    &record.video_url,
                )
                .await;
            record.trans_eval_score = Some(verdict.score);
            record.trans_eval_reason = Some(verdict.reason);
        }

        if record.comment_eval_score.is_none() {
            let comments = record.joined_comments();
            let verdict = self
                .judge_or_zero(
                    &self.comment_criteria,
                    comments.as_deref(),
                    record.comment_summary.as_deref(),
                    &record.video_url,
                )
                .await;
            record.comment_eval_score = Some(verdict.score);
            record.comment_eval_reason = Some(verdict.reason);
        }
    }

    /// A record that cannot be judged gets zero credit instead of aborting
    /// the run.
    async fn judge_or_zero(
        &self,
        criteria: &JudgeCriteria,
        source: Option<&str>,
        summary: Option<&str>,
        video_url: &str,
    ) -> JudgeVerdict {
        let (source, summary) = match (source, summary) {
            (Some(s), Some(m)) if !s.trim().is_empty() && !m.trim().is_empty() => (s, m),
            _ => {
                warn!(
                    video = video_url,
                    criteria = %criteria.name,
                    "Source or summary missing, scoring 0"
                );
                return JudgeVerdict {
                    score: 0.0,
                    reason: "source or summary missing".to_string(),
                    passed: false,
                };
            }
        };

        match self.judge.judge(criteria, source, summary).await {
            Ok(verdict) => verdict,
            Err(e) => {
                error!(
                    video = video_url,
                    criteria = %criteria.name,
                    error = %e,
                    "Judge call failed, scoring 0"
                );
                JudgeVerdict {
                    score: 0.0,
                    reason: format!("judge call failed: {e}"),
                    passed: false,
                }
            }
        }
    }
}
