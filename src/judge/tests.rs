use super::*;
use crate::judge::mock::MockJudgeBackend;
use crate::judge::types::parse_judgement;

fn criteria(threshold: f32) -> JudgeCriteria {
    JudgeCriteria::new("transcript summary", threshold)
}

#[test]
fn test_parse_bare_json() {
    let raw = parse_judgement(r#"{"score": 0.85, "reason": "covers the main points"}"#).unwrap();
    assert_eq!(raw.score, 0.85);
    assert_eq!(raw.reason, "covers the main points");
}

#[test]
fn test_parse_json_wrapped_in_prose() {
    let text = "Here is my evaluation:\n```json\n{\"score\": 0.4, \"reason\": \"misses the \
                conclusion\"}\n```\nLet me know if you need more detail.";
    let raw = parse_judgement(text).unwrap();
    assert_eq!(raw.score, 0.4);
    assert_eq!(raw.reason, "misses the conclusion");
}

#[test]
fn test_parse_missing_reason_defaults_empty() {
    let raw = parse_judgement(r#"{"score": 1.0}"#).unwrap();
    assert_eq!(raw.score, 1.0);
    assert!(raw.reason.is_empty());
}

#[test]
fn test_parse_garbage_is_malformed() {
    let err = parse_judgement("the summary seems fine to me").unwrap_err();
    assert!(matches!(err, JudgeError::MalformedResponse { .. }));
}

#[test]
fn test_parse_empty_response() {
    assert!(matches!(
        parse_judgement("   "),
        Err(JudgeError::EmptyResponse)
    ));
}

#[test]
fn test_parse_rejects_out_of_range_score() {
    let err = parse_judgement(r#"{"score": 7.5, "reason": "enthusiastic"}"#).unwrap_err();
    assert!(matches!(err, JudgeError::ScoreOutOfRange { value } if value == 7.5));

    let err = parse_judgement(r#"{"score": -0.1}"#).unwrap_err();
    assert!(matches!(err, JudgeError::ScoreOutOfRange { .. }));
}

#[tokio::test]
async fn test_judge_applies_threshold() {
    let judge = QualityJudge::with_backend(MockJudgeBackend::always(0.82));

    let verdict = judge
        .judge(&criteria(0.70), "source text", "summary text")
        .await
        .unwrap();

    assert_eq!(verdict.score, 0.82);
    assert!(verdict.passed);
    assert!(!verdict.reason.is_empty());
}

#[tokio::test]
async fn test_judge_fails_below_threshold() {
    let judge = QualityJudge::with_backend(MockJudgeBackend::always(0.55));

    let verdict = judge
        .judge(&criteria(0.70), "source", "summary")
        .await
        .unwrap();

    assert!(!verdict.passed);
}

#[tokio::test]
async fn test_score_equal_to_threshold_passes() {
    let judge = QualityJudge::with_backend(MockJudgeBackend::always(0.70));

    let verdict = judge
        .judge(&criteria(0.70), "source", "summary")
        .await
        .unwrap();

    assert!(verdict.passed);
}

#[tokio::test]
async fn test_backend_failure_propagates() {
    let judge = QualityJudge::with_backend(MockJudgeBackend::failing("rate limited"));

    let err = judge
        .judge(&criteria(0.70), "source", "summary")
        .await
        .unwrap_err();

    assert!(matches!(err, JudgeError::Provider { message } if message == "rate limited"));
}

#[tokio::test]
async fn test_scripted_backend_replays_in_order() {
    let backend = MockJudgeBackend::scripted(&[0.9, 0.3]);
    let judge = QualityJudge::with_backend(backend);
    let crit = criteria(0.70);

    assert!(judge.judge(&crit, "s", "a").await.unwrap().passed);
    assert!(!judge.judge(&crit, "s", "b").await.unwrap().passed);
    // drained scripts repeat the final judgement
    assert!(!judge.judge(&crit, "s", "c").await.unwrap().passed);
    assert_eq!(judge.backend().call_count(), 3);
}
