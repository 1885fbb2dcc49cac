use crate::bias::{BiasCheckResult, SummaryKind};

/// One record submitted for validation. Empty summary strings are valid
/// input ("nothing to summarize") and are handled, not rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCheckRequest {
    /// Identifier of the video record.
    pub record_id: String,
    /// Video title, when upstream metadata provided one.
    pub title: Option<String>,
    /// Generated summary of the transcript.
    pub video_summary: String,
    /// Generated summary of the comment section.
    pub comment_summary: String,
}

/// Which summary field an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryField {
    Video,
    Comment,
}

impl SummaryField {
    /// Capitalized label used in issue messages.
    pub fn label(&self) -> &'static str {
        match self {
            SummaryField::Video => "Video",
            SummaryField::Comment => "Comment",
        }
    }

    /// Sentinel substring the summarizer emits when this field had no input.
    pub fn unavailable_marker(&self) -> &'static str {
        match self {
            SummaryField::Video => "No transcript available",
            SummaryField::Comment => "No comments available",
        }
    }

    /// The bias-check kind for this field.
    pub fn kind(&self) -> SummaryKind {
        match self {
            SummaryField::Video => SummaryKind::Video,
            SummaryField::Comment => SummaryKind::Comment,
        }
    }
}

/// A tagged reason a record failed validation.
///
/// Content problems are values, never errors; the validator accumulates them
/// and derives the verdict from the full list.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// The summary field is empty.
    MissingSource { field: SummaryField },
    /// The summary field holds an "unavailable" sentinel instead of content.
    SummaryIsPlaceholder { field: SummaryField },
    /// The summary is below the configured word minimum.
    SummaryTooShort {
        field: SummaryField,
        words: usize,
        minimum: usize,
    },
    /// The summary drifted semantically from the title.
    BiasDetected {
        field: SummaryField,
        score: f32,
        threshold: f32,
    },
    /// Bias checking could not run for this record.
    BiasCheckFailed { reason: String },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::MissingSource { field } => {
                write!(f, "{} summary is missing.", field.label())
            }
            ValidationIssue::SummaryIsPlaceholder { field } => {
                write!(f, "{} summary is missing or unavailable.", field.label())
            }
            ValidationIssue::SummaryTooShort { field, minimum, .. } => {
                write!(
                    f,
                    "{} summary is too short (less than {} words).",
                    field.label(),
                    minimum
                )
            }
            ValidationIssue::BiasDetected { field, score, .. } => match field {
                SummaryField::Video => write!(
                    f,
                    "Potential bias detected: Low similarity ({:.2}) between video title and summary.",
                    score
                ),
                SummaryField::Comment => write!(
                    f,
                    "Potential bias detected: Low similarity ({:.2}) between video title and comment summary.",
                    score
                ),
            },
            ValidationIssue::BiasCheckFailed { reason } => {
                write!(f, "Cannot perform bias check: {}", reason)
            }
        }
    }
}

/// Aggregated validation outcome for one record.
///
/// Invariant: `is_valid` is `true` iff `issues` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationVerdict {
    pub record_id: String,
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
    /// Detail of the video-summary bias check, when one ran.
    pub bias_check: Option<BiasCheckResult>,
}

impl ValidationVerdict {
    pub(crate) fn new(
        record_id: String,
        issues: Vec<ValidationIssue>,
        bias_check: Option<BiasCheckResult>,
    ) -> Self {
        Self {
            record_id,
            is_valid: issues.is_empty(),
            issues,
            bias_check,
        }
    }

    /// Issue messages in submission order.
    pub fn issue_messages(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.to_string()).collect()
    }
}
