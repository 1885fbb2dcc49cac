//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants from primary ones to avoid drift.

/// Default similarity threshold below which a summary is flagged as biased.
pub const DEFAULT_BIAS_THRESHOLD: f32 = 0.30;

/// Default minimum word count for a structurally valid summary.
pub const DEFAULT_MIN_SUMMARY_WORDS: usize = 10;

/// Maximum characters of a summary carried in a bias-check preview.
pub const SUMMARY_PREVIEW_CHARS: usize = 100;

/// Default embedding dimension (MiniLM-class sentence encoders).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Default max tokens fed to the sentence encoder.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Default pass threshold for LLM-judged summary quality.
pub const DEFAULT_JUDGE_THRESHOLD: f32 = 0.70;

/// Default number of judged checks that must pass for a corpus run to promote.
pub const DEFAULT_CORPUS_PASS_QUOTA: usize = 15;

/// Default delay between judged records (externally imposed rate limit).
pub const DEFAULT_JUDGE_DELAY_SECS: u64 = 2;

/// Sentinel prefixes the summarization step emits when it had nothing to
/// summarize or failed outright. Summaries containing one of these are not
/// semantic content and must never be scored for bias.
pub const PLACEHOLDER_MESSAGES: &[&str] = &[
    "No transcript available",
    "No comments available",
    "Failed to generate",
    "Error generating",
];

/// Sentinel emitted in place of a video (transcript) summary.
pub const VIDEO_SUMMARY_UNAVAILABLE: &str = "No transcript available.";

/// Sentinel emitted in place of a comment summary.
pub const COMMENT_SUMMARY_UNAVAILABLE: &str = "No comments available.";

/// Returns `true` if `text` contains any known placeholder sentinel.
pub fn contains_placeholder(text: &str) -> bool {
    PLACEHOLDER_MESSAGES.iter().any(|p| text.contains(p))
}
