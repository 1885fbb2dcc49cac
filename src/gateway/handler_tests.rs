use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::bias::BiasMonitor;
use crate::gateway::payload::{VIDSYNTH_STATUS_HEADER, ValidateResponse};
use crate::gateway::{HandlerState, create_router_with_state};
use crate::scoring::MockScorer;
use crate::validator::{SummaryValidator, ValidatorConfig};

fn router_with_scorer(scorer: MockScorer) -> Router {
    let monitor = Arc::new(BiasMonitor::with_scorer("mock".to_string(), scorer, 0.30).unwrap());
    let validator = Arc::new(SummaryValidator::new(
        ValidatorConfig::default(),
        Some(Arc::clone(&monitor)),
    ));
    create_router_with_state(HandlerState::new(validator, Some(monitor), "stub"))
}

fn router_without_monitor() -> Router {
    let validator: Arc<SummaryValidator<MockScorer>> = Arc::new(SummaryValidator::new(
        ValidatorConfig {
            enable_bias_check: false,
            ..Default::default()
        },
        None,
    ));
    create_router_with_state(HandlerState::new(validator, None, "disabled"))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn validate_body() -> Value {
    json!({
        "video_id": "abc123",
        "video_title": "Test Video Title",
        "video_summary": "This is a sufficiently long video summary that discusses the main \
                          topics covered in the video content.",
        "comment_summary": "This is a sufficiently long comment summary that captures the \
                            sentiment and themes from viewer comments.",
    })
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_healthz() {
    let response = router_without_monitor()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(VIDSYNTH_STATUS_HEADER).unwrap(),
        "healthy"
    );
}

#[tokio::test]
async fn test_ready_reports_embedder_and_flag() {
    let response = router_with_scorer(MockScorer::fixed(0.9))
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["bias_check_enabled"], true);
    assert_eq!(body["embedder"], "stub");
}

#[tokio::test]
async fn test_ready_with_bias_disabled() {
    let response = router_without_monitor()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = read_json(response).await;
    assert_eq!(body["bias_check_enabled"], false);
    assert_eq!(body["embedder"], "disabled");
}

#[tokio::test]
async fn test_validate_happy_path() {
    let response = router_with_scorer(MockScorer::fixed(0.85))
        .oneshot(json_request("POST", "/validate", validate_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(VIDSYNTH_STATUS_HEADER).unwrap(),
        "validated"
    );

    let body = read_json(response).await;
    let parsed: ValidateResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.video_id, "abc123");
    assert!(parsed.is_valid);
    assert!(parsed.issues.is_empty());
    let bias = parsed.bias_check.unwrap();
    assert_eq!(bias.similarity_score, Some(0.85));
    assert!(!bias.is_biased);
    assert_eq!(bias.video_title.as_deref(), Some("Test Video Title"));
}

#[tokio::test]
async fn test_validate_reports_issues_with_200() {
    let mut body = validate_body();
    body["video_summary"] = json!("");

    let response = router_with_scorer(MockScorer::fixed(0.85))
        .oneshot(json_request("POST", "/validate", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed: ValidateResponse = serde_json::from_value(read_json(response).await).unwrap();
    assert!(!parsed.is_valid);
    assert!(
        parsed
            .issues
            .iter()
            .any(|i| i == "Video summary is missing.")
    );
}

#[tokio::test]
async fn test_validate_flags_bias() {
    let response = router_with_scorer(MockScorer::fixed(0.05))
        .oneshot(json_request("POST", "/validate", validate_body()))
        .await
        .unwrap();

    let parsed: ValidateResponse = serde_json::from_value(read_json(response).await).unwrap();
    assert!(!parsed.is_valid);
    assert!(parsed.issues[0].starts_with("Potential bias detected"));
    assert!(parsed.bias_check.unwrap().is_biased);
}

#[tokio::test]
async fn test_validate_missing_title_is_optional() {
    let mut body = validate_body();
    body.as_object_mut().unwrap().remove("video_title");

    let response = router_with_scorer(MockScorer::fixed(0.85))
        .oneshot(json_request("POST", "/validate", body))
        .await
        .unwrap();

    // deserializes fine; the missing title surfaces as a validation issue
    assert_eq!(response.status(), StatusCode::OK);
    let parsed: ValidateResponse = serde_json::from_value(read_json(response).await).unwrap();
    assert!(!parsed.is_valid);
    assert!(
        parsed
            .issues
            .iter()
            .any(|i| i.contains("video title not provided"))
    );
}

#[tokio::test]
async fn test_validate_rejects_missing_required_field() {
    let mut body = validate_body();
    body.as_object_mut().unwrap().remove("video_summary");

    let response = router_with_scorer(MockScorer::fixed(0.85))
        .oneshot(json_request("POST", "/validate", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_validate_rejects_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"video_id\":"))
        .unwrap();

    let response = router_with_scorer(MockScorer::fixed(0.85))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_threshold_update() {
    let router = router_with_scorer(MockScorer::fixed(0.5));

    let response = router
        .clone()
        .oneshot(json_request("PUT", "/threshold", json!({"threshold": 0.6})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["threshold"], 0.6);

    // the new threshold is live for subsequent validations
    let response = router
        .oneshot(json_request("POST", "/validate", validate_body()))
        .await
        .unwrap();
    let parsed: ValidateResponse = serde_json::from_value(read_json(response).await).unwrap();
    assert!(parsed.bias_check.unwrap().is_biased);
}

#[tokio::test]
async fn test_threshold_update_rejects_out_of_range() {
    let response = router_with_scorer(MockScorer::fixed(0.5))
        .oneshot(json_request("PUT", "/threshold", json!({"threshold": 1.5})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(VIDSYNTH_STATUS_HEADER).unwrap(),
        "error"
    );
    let body = read_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("1.5"));
}

#[tokio::test]
async fn test_threshold_update_without_monitor_conflicts() {
    let response = router_without_monitor()
        .oneshot(json_request("PUT", "/threshold", json!({"threshold": 0.5})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}
