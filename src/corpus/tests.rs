use super::*;
use std::time::Duration;

use tempfile::TempDir;

use crate::judge::mock::MockJudgeBackend;
use crate::judge::QualityJudge;

fn record(url: &str) -> VideoRecord {
    VideoRecord {
        video_url: url.to_string(),
        speaker: Some("Speaker".to_string()),
        category: Some("Education".to_string()),
        duration: Some("Short".to_string()),
        transcript: Some("Full transcript of the talk covering several topics in depth.".to_string()),
        comment_array: vec![
            "Great explanation, thanks!".to_string(),
            "The pacing was a bit fast.".to_string(),
        ],
        trans_summary: Some("A talk covering several topics.".to_string()),
        comment_summary: Some("Viewers liked it but found the pacing fast.".to_string()),
        trans_eval_score: None,
        trans_eval_reason: None,
        comment_eval_score: None,
        comment_eval_reason: None,
    }
}

fn write_corpus(dir: &TempDir, records: Vec<VideoRecord>) -> std::path::PathBuf {
    let path = dir.path().join("videoList.json");
    VideoCorpus {
        video_list: records,
    }
    .save(&path)
    .unwrap();
    path
}

fn evaluator(backend: MockJudgeBackend) -> CorpusEvaluator<MockJudgeBackend> {
    CorpusEvaluator::new(QualityJudge::with_backend(backend), 0.70, 3)
}

fn pacer() -> RatePacer {
    RatePacer::new(Duration::from_millis(1))
}

#[test]
fn test_corpus_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir, vec![record("https://youtu.be/a")]);

    let loaded = VideoCorpus::load(&path).unwrap();
    assert_eq!(loaded.video_list.len(), 1);
    assert_eq!(loaded.video_list[0].video_url, "https://youtu.be/a");
    assert!(loaded.video_list[0].trans_eval_score.is_none());
}

#[test]
fn test_load_missing_file_is_read_error() {
    let err = VideoCorpus::load(std::path::Path::new("/nonexistent/videoList.json")).unwrap_err();
    assert!(matches!(err, CorpusError::Read { .. }));
}

#[test]
fn test_load_malformed_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("videoList.json");
    std::fs::write(&path, "{\"videoList\": [").unwrap();

    let err = VideoCorpus::load(&path).unwrap_err();
    assert!(matches!(err, CorpusError::Parse { .. }));
}

#[tokio::test]
async fn test_evaluate_scores_both_fields_per_record() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir, vec![record("v1"), record("v2")]);

    let eval = evaluator(MockJudgeBackend::always(0.9));
    let report = eval.evaluate(&path, &mut pacer()).await.unwrap();

    assert_eq!(report.checks, 4);
    assert_eq!(report.passed, 4);
    assert!(report.promoted());
    assert_eq!(eval.judge.backend().call_count(), 4);

    let saved = VideoCorpus::load(&path).unwrap();
    for rec in &saved.video_list {
        assert_eq!(rec.trans_eval_score, Some(0.9));
        assert_eq!(rec.comment_eval_score, Some(0.9));
        assert!(rec.trans_eval_reason.is_some());
    }
}

#[tokio::test]
async fn test_below_quota_is_not_promoted() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir, vec![record("v1")]);

    // one field passes, one fails; quota is 3
    let eval = evaluator(MockJudgeBackend::scripted(&[0.9, 0.2]));
    let report = eval.evaluate(&path, &mut pacer()).await.unwrap();

    assert_eq!(report.checks, 2);
    assert_eq!(report.passed, 1);
    assert!(!report.promoted());
}

#[tokio::test]
async fn test_already_scored_records_are_not_rejudged() {
    let dir = TempDir::new().unwrap();
    let mut done = record("v1");
    done.trans_eval_score = Some(0.95);
    done.trans_eval_reason = Some("previous run".to_string());
    done.comment_eval_score = Some(0.10);
    done.comment_eval_reason = Some("previous run".to_string());
    let path = write_corpus(&dir, vec![done, record("v2")]);

    let eval = evaluator(MockJudgeBackend::always(0.8));
    let report = eval.evaluate(&path, &mut pacer()).await.unwrap();

    // only the second record's two fields hit the judge
    assert_eq!(eval.judge.backend().call_count(), 2);
    assert_eq!(report.checks, 4);
    // 0.95 and the two fresh 0.8s pass, the stored 0.10 does not
    assert_eq!(report.passed, 3);
    assert!(report.promoted());
}

#[tokio::test]
async fn test_missing_summary_gets_zero_without_judge_call() {
    let dir = TempDir::new().unwrap();
    let mut rec = record("v1");
    rec.trans_summary = None;
    let path = write_corpus(&dir, vec![rec]);

    let eval = evaluator(MockJudgeBackend::always(0.9));
    let report = eval.evaluate(&path, &mut pacer()).await.unwrap();

    // only the comment summary reaches the judge
    assert_eq!(eval.judge.backend().call_count(), 1);
    assert_eq!(report.checks, 2);
    assert_eq!(report.passed, 1);

    let saved = VideoCorpus::load(&path).unwrap();
    assert_eq!(saved.video_list[0].trans_eval_score, Some(0.0));
    assert_eq!(
        saved.video_list[0].trans_eval_reason.as_deref(),
        Some("source or summary missing")
    );
}

#[tokio::test]
async fn test_empty_comment_array_counts_as_missing_source() {
    let dir = TempDir::new().unwrap();
    let mut rec = record("v1");
    rec.comment_array.clear();
    let path = write_corpus(&dir, vec![rec]);

    let eval = evaluator(MockJudgeBackend::always(0.9));
    eval.evaluate(&path, &mut pacer()).await.unwrap();

    let saved = VideoCorpus::load(&path).unwrap();
    assert_eq!(saved.video_list[0].comment_eval_score, Some(0.0));
    assert_eq!(saved.video_list[0].trans_eval_score, Some(0.9));
}

#[tokio::test]
async fn test_judge_failure_scores_zero_and_continues() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir, vec![record("v1")]);

    let eval = evaluator(MockJudgeBackend::failing("provider unavailable"));
    let report = eval.evaluate(&path, &mut pacer()).await.unwrap();

    assert_eq!(report.checks, 2);
    assert_eq!(report.passed, 0);

    let saved = VideoCorpus::load(&path).unwrap();
    assert!(saved.video_list[0]
        .trans_eval_reason
        .as_deref()
        .unwrap()
        .contains("provider unavailable"));
}
