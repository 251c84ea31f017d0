//! OpenAI-compatible backend against a local HTTP mock.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use madds_advisor::{
    ClassificationAdvisor, ClassificationRequest, CompletionRequest, LlmBackend, LlmError,
    NoClassificationReason, OpenAiBackend,
};
use madds_taxonomy::TaxonomyStore;

fn chat_reply(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 812, "completion_tokens": 24, "total_tokens": 836 }
    })
}

async fn received_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    let last = requests.last().unwrap();
    serde_json::from_slice(&last.body).unwrap()
}

#[tokio::test]
async fn test_chat_completion_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(r#"{"suggested_code":"220"}"#)))
        .expect(1)
        .mount(&server)
        .await;

    let backend = OpenAiBackend::new(server.uri(), "gpt-test", Some("sk-test".to_string()));
    let request = CompletionRequest::user("What is this?")
        .with_system("You classify items.")
        .with_image("https://blobs.test/chair.jpg")
        .with_max_tokens(256)
        .with_json_schema("madds_classification", json!({ "type": "object" }));

    let response = backend.complete(request).await.unwrap();
    assert_eq!(response.content, r#"{"suggested_code":"220"}"#);
    assert_eq!(response.usage.prompt_tokens, 812);
    assert_eq!(response.usage.total(), 836);

    let body = received_body(&server).await;
    assert_eq!(body["model"], "gpt-test");
    assert_eq!(body["max_tokens"], 256);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"][0]["type"], "text");
    assert_eq!(body["messages"][1]["content"][0]["text"], "What is this?");
    assert_eq!(body["messages"][1]["content"][1]["type"], "image_url");
    assert_eq!(
        body["messages"][1]["content"][1]["image_url"]["url"],
        "https://blobs.test/chair.jpg"
    );
    assert_eq!(body["response_format"]["type"], "json_schema");
    assert_eq!(body["response_format"]["json_schema"]["name"], "madds_classification");
}

#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "2"))
        .mount(&server)
        .await;

    let backend = OpenAiBackend::new(server.uri(), "gpt-test", None);
    let err = backend.complete(CompletionRequest::user("hi")).await.unwrap_err();

    assert!(matches!(err, LlmError::RateLimited { retry_after_ms: Some(2000) }));
}

#[tokio::test]
async fn test_huge_retry_after_saturates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429).insert_header("retry-after", u64::MAX.to_string().as_str()),
        )
        .mount(&server)
        .await;

    let backend = OpenAiBackend::new(server.uri(), "gpt-test", None);
    let err = backend.complete(CompletionRequest::user("hi")).await.unwrap_err();

    assert!(matches!(err, LlmError::RateLimited { retry_after_ms: Some(u64::MAX) }));
}

#[tokio::test]
async fn test_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
        .mount(&server)
        .await;

    let backend = OpenAiBackend::new(server.uri(), "gpt-test", None);
    let err = backend.complete(CompletionRequest::user("hi")).await.unwrap_err();

    match err {
        LlmError::RequestFailed(message) => assert!(message.contains("model crashed")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_reply("{}"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let backend = OpenAiBackend::new(server.uri(), "gpt-test", None)
        .with_timeout(Duration::from_millis(50));
    let err = backend.complete(CompletionRequest::user("hi")).await.unwrap_err();

    assert!(matches!(err, LlmError::Timeout(50)));
}

#[tokio::test]
async fn test_availability_sends_nothing() {
    let server = MockServer::start().await;
    let backend = OpenAiBackend::new(server.uri(), "gpt-test", None);

    assert!(backend.is_available().await);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_advisor_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(
            r#"{"improved_title": "Winter coat, size M", "condition": "used",
                "suggested_code": "220", "confidence": "high"}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let backend: Arc<dyn LlmBackend> = Arc::new(OpenAiBackend::new(server.uri(), "gpt-test", None));
    let store = Arc::new(TaxonomyStore::builtin().unwrap());
    let advisor = ClassificationAdvisor::new(vec![backend], store);

    let outcome = advisor
        .classify(ClassificationRequest::offer("Winter coat size M", ""))
        .await;
    let classification = outcome.classification().unwrap();

    assert_eq!(classification.primary.suggested_code, "220");
    assert_eq!(classification.primary.main_category.title, "SHELTER SAFELY");
    assert_eq!(classification.backend, "gpt-test");
    assert_eq!(classification.cost.input_tokens, 812);
    assert_eq!(classification.cost.output_tokens, 24);

    // One classification, one request
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "POST");
    assert_eq!(requests[0].url.path(), "/chat/completions");

    let body = received_body(&server).await;
    let prompt = body["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("Title: Winter coat size M"));
    assert!(prompt.contains("220 = FURNISH HOME"));
    assert_eq!(body["response_format"]["json_schema"]["schema"]["required"][0], "suggested_code");
}

#[tokio::test]
async fn test_advisor_degrades_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let backend: Arc<dyn LlmBackend> = Arc::new(OpenAiBackend::new(server.uri(), "gpt-test", None));
    let advisor = ClassificationAdvisor::new(vec![backend], Arc::new(TaxonomyStore::builtin().unwrap()));

    let outcome = advisor.classify(ClassificationRequest::need("Crib", "")).await;

    assert_eq!(outcome.reason(), Some(NoClassificationReason::BackendFailed));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
