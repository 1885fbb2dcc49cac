use super::*;
use crate::scoring::MockScorer;

fn monitor_with(scorer: MockScorer, threshold: f32) -> BiasMonitor<MockScorer> {
    BiasMonitor::with_scorer("mock".to_string(), scorer, threshold).unwrap()
}

#[test]
fn test_empty_title_skips_without_touching_scorer() {
    let monitor = monitor_with(MockScorer::fixed(0.9), 0.30);

    let result = monitor.check_bias("", "Some summary content.", SummaryKind::Video);

    assert!(result.is_skipped());
    assert!(!result.is_biased);
    assert!(result.similarity_score.is_none());
    assert_eq!(result.reason.as_deref(), Some("empty title"));
    assert_eq!(monitor.scorer().call_count(), 0);
}

#[test]
fn test_blank_title_skips() {
    let monitor = monitor_with(MockScorer::fixed(0.9), 0.30);

    let result = monitor.check_bias("   ", "Some summary content.", SummaryKind::Video);

    assert!(result.is_skipped());
    assert_eq!(monitor.scorer().call_count(), 0);
}

#[test]
fn test_empty_summary_marked_biased() {
    let monitor = monitor_with(MockScorer::fixed(0.9), 0.30);

    let result = monitor.check_bias("Python Tutorial", "", SummaryKind::Video);

    assert!(result.is_errored());
    assert!(result.is_biased);
    assert_eq!(result.similarity_score, Some(0.0));
    assert_eq!(result.reason.as_deref(), Some("empty summary"));
    assert_eq!(monitor.scorer().call_count(), 0);
}

#[test]
fn test_placeholder_summary_skipped() {
    let monitor = monitor_with(MockScorer::fixed(0.9), 0.30);

    for placeholder in [
        "No transcript available.",
        "No comments available.",
        "Failed to generate summary",
        "Error generating summary: timeout",
    ] {
        let result = monitor.check_bias("Some Title", placeholder, SummaryKind::Video);
        assert!(result.is_skipped(), "expected skip for {placeholder:?}");
        assert!(!result.is_biased);
        assert_eq!(result.reason.as_deref(), Some("placeholder message"));
    }

    assert_eq!(monitor.scorer().call_count(), 0);
}

#[test]
fn test_high_similarity_not_biased() {
    let monitor = monitor_with(MockScorer::fixed(0.85), 0.30);

    let result = monitor.check_bias(
        "Python Tutorial",
        "This tutorial covers Python programming basics.",
        SummaryKind::Video,
    );

    assert!(result.is_scored());
    assert!(!result.is_biased);
    assert_eq!(result.similarity_score, Some(0.85));
    assert_eq!(result.threshold, 0.30);
    assert_eq!(result.title.as_deref(), Some("Python Tutorial"));
}

#[test]
fn test_low_similarity_biased() {
    let monitor = monitor_with(MockScorer::fixed(0.12), 0.30);

    let result = monitor.check_bias(
        "Python Tutorial",
        "Completely unrelated content about cooking.",
        SummaryKind::Video,
    );

    assert!(result.is_scored());
    assert!(result.is_biased);
    assert_eq!(result.similarity_score, Some(0.12));
}

#[test]
fn test_scorer_failure_fails_closed() {
    let monitor = monitor_with(MockScorer::failing("embedding backend down"), 0.30);

    let result = monitor.check_bias("A Title", "A perfectly normal summary.", SummaryKind::Video);

    assert!(result.is_errored());
    assert!(result.is_biased);
    assert_eq!(result.similarity_score, Some(0.0));
    assert!(
        result
            .reason
            .as_deref()
            .unwrap()
            .contains("embedding backend down")
    );
}

#[test]
fn test_check_bias_is_idempotent() {
    let monitor = monitor_with(MockScorer::stub(), 0.30);

    let first = monitor.check_bias(
        "Python Tutorial",
        "A tutorial about Python programming.",
        SummaryKind::Video,
    );
    let second = monitor.check_bias(
        "Python Tutorial",
        "A tutorial about Python programming.",
        SummaryKind::Video,
    );

    assert_eq!(first.similarity_score, second.similarity_score);
    assert_eq!(first.is_biased, second.is_biased);
}

#[test]
fn test_threshold_monotonicity() {
    let monitor = monitor_with(MockScorer::fixed(0.5), 0.30);

    // score 0.5 >= 0.30: not biased
    let result = monitor.check_bias("T", "some real summary", SummaryKind::Video);
    assert!(!result.is_biased);

    // raising the threshold above the score flips the verdict
    monitor.update_threshold(0.6).unwrap();
    let result = monitor.check_bias("T", "some real summary", SummaryKind::Video);
    assert!(result.is_biased);
    assert_eq!(result.threshold, 0.6);

    // and lowering it back flips it again
    monitor.update_threshold(0.4).unwrap();
    let result = monitor.check_bias("T", "some real summary", SummaryKind::Video);
    assert!(!result.is_biased);
}

#[test]
fn test_threshold_flip_around_observed_stub_score() {
    let monitor = monitor_with(MockScorer::stub(), 0.30);

    let scored = monitor.check_bias(
        "Python Tutorial",
        "This tutorial covers Python programming basics and more.",
        SummaryKind::Video,
    );
    let score = scored.similarity_score.unwrap();
    assert!(score > 0.0 && score < 1.0);

    monitor.update_threshold((score + 0.05).min(1.0)).unwrap();
    let above = monitor.check_bias(
        "Python Tutorial",
        "This tutorial covers Python programming basics and more.",
        SummaryKind::Video,
    );
    assert!(above.is_biased);

    monitor.update_threshold((score - 0.05).max(0.0)).unwrap();
    let below = monitor.check_bias(
        "Python Tutorial",
        "This tutorial covers Python programming basics and more.",
        SummaryKind::Video,
    );
    assert!(!below.is_biased);
}

#[test]
fn test_update_threshold_rejects_out_of_range() {
    let monitor = monitor_with(MockScorer::fixed(0.5), 0.30);

    assert!(matches!(
        monitor.update_threshold(1.5),
        Err(BiasError::InvalidThreshold { .. })
    ));
    assert!(matches!(
        monitor.update_threshold(-0.1),
        Err(BiasError::InvalidThreshold { .. })
    ));

    // old threshold still active: 0.5 >= 0.30 means not biased
    let result = monitor.check_bias("T", "a summary to score", SummaryKind::Video);
    assert_eq!(result.threshold, 0.30);
    assert!(!result.is_biased);
}

#[test]
fn test_update_threshold_accepts_bounds() {
    let monitor = monitor_with(MockScorer::fixed(0.5), 0.30);

    monitor.update_threshold(0.0).unwrap();
    assert_eq!(monitor.threshold(), 0.0);
    monitor.update_threshold(1.0).unwrap();
    assert_eq!(monitor.threshold(), 1.0);
}

#[test]
fn test_construction_rejects_invalid_threshold() {
    assert!(matches!(
        BiasMonitor::with_scorer("mock".to_string(), MockScorer::fixed(0.5), 1.2),
        Err(BiasError::InvalidThreshold { .. })
    ));
}

#[test]
fn test_stub_monitor_same_topic_clears_default_threshold() {
    let monitor = BiasMonitor::stub(0.30).unwrap();

    let result = monitor.check_bias(
        "Python Tutorial",
        "This tutorial covers Python programming basics and walks through \
         installation, syntax, and your first script.",
        SummaryKind::Video,
    );

    assert!(result.is_scored());
    assert!(result.similarity_score.unwrap() > 0.30);
    assert!(!result.is_biased);
}

#[test]
fn test_stub_monitor_off_topic_falls_below_default_threshold() {
    let monitor = BiasMonitor::stub(0.30).unwrap();

    let result = monitor.check_bias(
        "Python Tutorial",
        "This recipe explains how to bake sourdough bread at home using a cast iron pot.",
        SummaryKind::Video,
    );

    assert!(result.is_scored());
    assert!(result.similarity_score.unwrap() < 0.30);
    assert!(result.is_biased);
}
