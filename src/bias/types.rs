use crate::constants::SUMMARY_PREVIEW_CHARS;

/// Which generated summary a bias check is inspecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    /// Summary of the video transcript.
    Video,
    /// Summary of the comment section.
    Comment,
}

impl SummaryKind {
    /// Short lowercase label (for logs and messages).
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryKind::Video => "video",
            SummaryKind::Comment => "comment",
        }
    }
}

impl std::fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a bias check concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiasOutcome {
    /// The summary was embedded and scored against the title.
    Scored,
    /// The check did not apply (empty title, placeholder summary).
    Skipped,
    /// The check could not run; treated as biased (fail closed).
    Errored,
}

impl BiasOutcome {
    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            BiasOutcome::Scored => "SCORED",
            BiasOutcome::Skipped => "SKIPPED",
            BiasOutcome::Errored => "ERRORED",
        }
    }
}

/// Structured result of a single bias check.
///
/// Invariants: `similarity_score` is `None` iff the check was skipped;
/// an `Errored` outcome always has `is_biased = true` and a score of `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct BiasCheckResult {
    /// Cosine similarity between title and summary, when computed.
    pub similarity_score: Option<f32>,
    /// Whether the summary is considered biased (drifted from the title).
    pub is_biased: bool,
    /// Threshold in effect when the check ran.
    pub threshold: f32,
    /// First characters of the checked summary, for inspection.
    pub summary_preview: Option<String>,
    /// The title the summary was compared against.
    pub title: Option<String>,
    /// How the check concluded.
    pub outcome: BiasOutcome,
    /// Why the check was skipped or errored.
    pub reason: Option<String>,
}

impl BiasCheckResult {
    pub(crate) fn scored(title: &str, summary: &str, score: f32, threshold: f32) -> Self {
        Self {
            similarity_score: Some(score),
            is_biased: score < threshold,
            threshold,
            summary_preview: Some(preview(summary)),
            title: Some(title.to_string()),
            outcome: BiasOutcome::Scored,
            reason: None,
        }
    }

    pub(crate) fn skipped(threshold: f32, reason: &str) -> Self {
        Self {
            similarity_score: None,
            is_biased: false,
            threshold,
            summary_preview: None,
            title: None,
            outcome: BiasOutcome::Skipped,
            reason: Some(reason.to_string()),
        }
    }

    pub(crate) fn errored(title: &str, summary: &str, threshold: f32, reason: &str) -> Self {
        Self {
            similarity_score: Some(0.0),
            is_biased: true,
            threshold,
            summary_preview: Some(preview(summary)),
            title: Some(title.to_string()),
            outcome: BiasOutcome::Errored,
            reason: Some(reason.to_string()),
        }
    }

    /// Returns `true` if the summary was embedded and scored.
    pub fn is_scored(&self) -> bool {
        self.outcome == BiasOutcome::Scored
    }

    /// Returns `true` if the check did not apply.
    pub fn is_skipped(&self) -> bool {
        self.outcome == BiasOutcome::Skipped
    }

    /// Returns `true` if the check failed and was treated as biased.
    pub fn is_errored(&self) -> bool {
        self.outcome == BiasOutcome::Errored
    }
}

impl std::fmt::Display for BiasCheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.similarity_score {
            Some(score) => write!(
                f,
                "{} (score: {:.4}, threshold: {:.2}, biased: {})",
                self.outcome.debug_status(),
                score,
                self.threshold,
                self.is_biased
            ),
            None => write!(
                f,
                "{} ({})",
                self.outcome.debug_status(),
                self.reason.as_deref().unwrap_or("no reason")
            ),
        }
    }
}

fn preview(summary: &str) -> String {
    let mut truncated: String = summary.chars().take(SUMMARY_PREVIEW_CHARS).collect();
    if summary.chars().count() > SUMMARY_PREVIEW_CHARS {
        truncated.push_str("...");
    }
    truncated
}
