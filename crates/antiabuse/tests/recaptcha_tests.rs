use std::sync::Arc;

use antiabuse::{AntiAbuseError, RecaptchaVerifier, SubmittedToken, TokenSource, TokenVerifier};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACTION: &str = "refine_prompt";

fn verifier_for(server: &MockServer) -> RecaptchaVerifier {
    RecaptchaVerifier::new(
        "test-secret".to_string(),
        format!("{}/recaptcha/api/siteverify", server.uri()),
        0.5,
    )
}

async fn mount_siteverify(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/recaptcha/api/siteverify"))
        .and(body_string_contains("secret=test-secret"))
        .and(body_string_contains("response=client-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_valid_token_is_accepted() {
    let server = MockServer::start().await;
    mount_siteverify(
        &server,
        json!({ "success": true, "score": 0.9, "action": ACTION, "hostname": "localhost" }),
    )
    .await;

    let assessment = verifier_for(&server).verify("client-token", ACTION).await.unwrap();
    assert_eq!(assessment.action, ACTION);
    assert_eq!(assessment.score, 0.9);
    assert_eq!(assessment.hostname.as_deref(), Some("localhost"));
}

#[tokio::test]
async fn test_rejected_token() {
    let server = MockServer::start().await;
    mount_siteverify(
        &server,
        json!({ "success": false, "error-codes": ["timeout-or-duplicate"] }),
    )
    .await;

    let err = verifier_for(&server).verify("client-token", ACTION).await.unwrap_err();
    match err {
        AntiAbuseError::Rejected { codes } => assert_eq!(codes, vec!["timeout-or-duplicate"]),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_action_mismatch() {
    let server = MockServer::start().await;
    mount_siteverify(
        &server,
        json!({ "success": true, "score": 0.9, "action": "login" }),
    )
    .await;

    let err = verifier_for(&server).verify("client-token", ACTION).await.unwrap_err();
    assert!(matches!(err, AntiAbuseError::ActionMismatch { .. }));
}

#[tokio::test]
async fn test_low_score() {
    let server = MockServer::start().await;
    mount_siteverify(
        &server,
        json!({ "success": true, "score": 0.1, "action": ACTION }),
    )
    .await;

    let err = verifier_for(&server).verify("client-token", ACTION).await.unwrap_err();
    assert!(matches!(err, AntiAbuseError::LowScore { .. }));
}

#[tokio::test]
async fn test_missing_score_is_rejected() {
    let server = MockServer::start().await;
    mount_siteverify(&server, json!({ "success": true, "action": ACTION })).await;

    let err = verifier_for(&server).verify("client-token", ACTION).await.unwrap_err();
    assert!(matches!(err, AntiAbuseError::MissingScore));
}

#[tokio::test]
async fn test_siteverify_outage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recaptcha/api/siteverify"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = verifier_for(&server).verify("client-token", ACTION).await.unwrap_err();
    assert!(matches!(err, AntiAbuseError::Unavailable(_)));
}

#[tokio::test]
async fn test_submitted_token_goes_through_siteverify() {
    let server = MockServer::start().await;
    mount_siteverify(
        &server,
        json!({ "success": true, "score": 0.7, "action": ACTION }),
    )
    .await;

    let source = SubmittedToken::new(
        Arc::new(verifier_for(&server)),
        Some("client-token".to_string()),
    );
    let token = source.acquire(ACTION).await.unwrap();

    assert_eq!(token.token, "client-token");
    assert_eq!(token.action, ACTION);
}
