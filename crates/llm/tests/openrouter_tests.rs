use llm::{GenerationRequest, LlmConfig, LlmError, OpenRouterGenerator, TextGenerator};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn generator_for(server: &MockServer) -> OpenRouterGenerator {
    let config = LlmConfig {
        api_key: "test-key".to_string(),
        base_url: server.uri(),
        model: "test/model".to_string(),
        temperature: None,
        max_tokens: None,
    };
    OpenRouterGenerator::new(&config).unwrap()
}

fn refine_request() -> GenerationRequest {
    GenerationRequest::new(
        "Refine this idea",
        "refined_prompt",
        json!({
            "type": "object",
            "properties": { "refinedPrompt": { "type": "string" } },
            "required": ["refinedPrompt"]
        }),
    )
}

fn completion_with(content: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "gen-123",
        "model": "test/model",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    }))
}

#[tokio::test]
async fn test_structured_completion_sends_schema_and_parses_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test/model",
            "messages": [{ "role": "user", "content": "Refine this idea" }],
            "response_format": {
                "type": "json_schema",
                "json_schema": { "name": "refined_prompt", "strict": true }
            }
        })))
        .respond_with(completion_with(json!(
            "{\"refinedPrompt\": \"A detailed prompt about a robot...\"}"
        )))
        .expect(1)
        .mount(&server)
        .await;

    let value = generator_for(&server).generate(refine_request()).await.unwrap();
    assert_eq!(value["refinedPrompt"], "A detailed prompt about a robot...");
}

#[tokio::test]
async fn test_empty_choices_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate(refine_request()).await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn test_null_content_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion_with(serde_json::Value::Null))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate(refine_request()).await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn test_api_error_body_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "No auth credentials found", "code": 401 }
        })))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate(refine_request()).await.unwrap_err();
    match err {
        LlmError::Api {
            message,
            status_code,
        } => {
            assert_eq!(message, "No auth credentials found");
            assert_eq!(status_code, Some(401));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .expect(1)
        .mount(&server)
        .await;

    let err = generator_for(&server).generate(refine_request()).await.unwrap_err();
    assert!(matches!(
        err,
        LlmError::RateLimited {
            retry_after: Some(7)
        }
    ));
}

#[tokio::test]
async fn test_server_error_with_plain_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = generator_for(&server).generate(refine_request()).await.unwrap_err();
    assert!(matches!(
        err,
        LlmError::Api {
            status_code: Some(503),
            ..
        }
    ));
}
