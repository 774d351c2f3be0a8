use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use sahayak_core::provider::ProviderResponse;
use serde_json::{json, Value};
use tracing_test::traced_test;

use crate::test_helpers::{test_server, Canned, StubInvoker};

const ALLOW_ORIGIN: &str = "access-control-allow-origin";

#[tokio::test]
async fn test_preflight_returns_empty_200_with_cors_headers() {
    let server = test_server(StubInvoker::new(vec![]));
    let response = server
        .method(Method::OPTIONS, "/functions/v1/game-generator")
        .add_header(HeaderName::from_static("origin"), HeaderValue::from_static("https://school.example"))
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-headers"),
            HeaderValue::from_static("authorization, x-client-info, apikey, content-type"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "");
    let headers = response.headers();
    assert_eq!(headers.get(ALLOW_ORIGIN).and_then(|v| v.to_str().ok()), Some("*"));
    let allowed = headers
        .get("access-control-allow-headers")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    for name in ["authorization", "x-client-info", "apikey", "content-type"] {
        assert!(allowed.contains(name), "missing {} in {}", name, allowed);
    }
}

#[tokio::test]
async fn test_content_success_shape() {
    let invoker = StubInvoker::new(vec![StubInvoker::text("सूर्य का प्रकाश...")]);
    let server = test_server(invoker.clone());
    let response = server
        .post("/functions/v1/content-generator")
        .add_header(HeaderName::from_static("origin"), HeaderValue::from_static("https://school.example"))
        .json(&json!({"prompt": "Explain photosynthesis", "language": "hindi"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"generatedText": "सूर्य का प्रकाश..."}));
    assert_eq!(response.headers().get(ALLOW_ORIGIN).and_then(|v| v.to_str().ok()), Some("*"));
    assert_eq!(invoker.calls(), 1);
}

#[tokio::test]
async fn test_game_success_shape() {
    let invoker = StubInvoker::new(vec![StubInvoker::text(
        "```json\n{\"title\":\"Quiz\",\"instructions\":\"Answer\",\"content\":{\"questions\":[]}}\n```",
    )]);
    let server = test_server(invoker);
    let response = server
        .post("/functions/v1/game-generator")
        .json(&json!({"topic": "Animals", "gradeLevel": "2", "gameType": "quiz"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "game": {"title": "Quiz", "instructions": "Answer", "content": {"questions": []}}
    }));
}

#[tokio::test]
async fn test_blank_field_is_rejected_without_provider_call() {
    let invoker = StubInvoker::new(vec![]);
    let server = test_server(invoker.clone());
    let response = server
        .post("/functions/v1/lesson-planner")
        .json(&json!({"subject": "Math", "grades": "  ", "topics": "Shapes"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "invalid_request");
    assert!(body["error"].as_str().unwrap_or_default().contains("grades"));
    assert_eq!(invoker.calls(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let server = test_server(StubInvoker::new(vec![]));
    let response = server
        .post("/functions/v1/quick-explainer")
        .text("{\"question\": ")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "invalid_request");
}

#[tokio::test]
async fn test_quota_error_shape_keeps_cors() {
    let invoker = StubInvoker::new(vec![Canned::Respond(Ok(ProviderResponse::Failure {
        status: 402,
        body: json!({"error": {"message": "payment required"}}),
    }))]);
    let server = test_server(invoker);
    let response = server
        .post("/functions/v1/content-generator")
        .add_header(HeaderName::from_static("origin"), HeaderValue::from_static("https://school.example"))
        .json(&json!({"prompt": "Fractions"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({
        "error": "AI credits exhausted. Please add credits to your workspace in Settings → Workspace → Usage.",
        "kind": "quota_exhausted"
    }));
    assert_eq!(response.headers().get(ALLOW_ORIGIN).and_then(|v| v.to_str().ok()), Some("*"));
}

#[tokio::test]
async fn test_visual_aid_without_image() {
    let invoker = StubInvoker::new(vec![StubInvoker::text("Draw the sun with eight rays.")]);
    let server = test_server(invoker);
    let response = server
        .post("/functions/v1/visual-aid-creator")
        .json(&json!({"description": "The sun"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "imageUrl": null,
        "description": "Draw the sun with eight rays.",
        "message": "no image produced"
    }));
}

#[tokio::test]
async fn test_reading_assessment_stops_after_failed_transcription() {
    let invoker = StubInvoker::new(vec![Canned::Respond(Ok(ProviderResponse::Failure {
        status: 500,
        body: json!({"error": {"message": "transcription backend down"}}),
    }))]);
    let server = test_server(invoker.clone());
    let response = server
        .post("/functions/v1/reading-assessment")
        .json(&json!({"audio": "data:audio/webm;base64,AAEC", "expectedText": "The cat sat."}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({"error": "transcription backend down", "kind": "upstream_error"}));
    assert_eq!(invoker.calls(), 1);
}

#[tokio::test]
async fn test_adapter_panic_becomes_unknown() {
    let invoker = StubInvoker::new(vec![Canned::Panic("stub exploded")]);
    let server = test_server(invoker);
    let response = server
        .post("/functions/v1/quick-explainer")
        .json(&json!({"question": "Why do leaves fall?", "language": "english"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({"error": "stub exploded", "kind": "unknown"}));
}

#[tokio::test]
async fn test_worksheet_invalid_base64() {
    let invoker = StubInvoker::new(vec![]);
    let server = test_server(invoker.clone());
    let response = server
        .post("/functions/v1/worksheet-differentiator")
        .json(&json!({"imageBase64": "data:image/png;base64,@@@"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["kind"], "unknown");
    assert_eq!(invoker.calls(), 0);
}

#[tokio::test]
async fn test_health_and_version() {
    let server = test_server(StubInvoker::new(vec![]));
    for path in ["/health", "/healthz"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        response.assert_json(&json!({"status": "ok"}));
    }
    let version: Value = server.get("/version").await.json();
    assert_eq!(version["cargo_version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_get_on_function_is_not_allowed() {
    let server = test_server(StubInvoker::new(vec![]));
    let response = server.get("/functions/v1/content-generator").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
#[traced_test]
async fn test_classified_failure_is_logged_once() {
    let invoker = StubInvoker::new(vec![Canned::Respond(Ok(ProviderResponse::Failure {
        status: 429,
        body: json!({"error": {"message": "Resource exhausted"}}),
    }))]);
    let server = test_server(invoker);
    let response = server
        .post("/functions/v1/content-generator")
        .json(&json!({"prompt": "Fractions"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    logs_assert(|lines: &[&str]| {
        match lines.iter().filter(|line| line.contains("Too many requests")).count() {
            1 => Ok(()),
            n => Err(format!("expected one log line for the rate-limit failure, found {}", n)),
        }
    });
}
