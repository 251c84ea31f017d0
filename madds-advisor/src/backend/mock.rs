//! Mock LLM backend for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::traits::*;

/// Mock backend for testing.
///
/// Configurable responses and behavior for unit tests. Every request is
/// recorded so tests can assert on prompt content and schema.
pub struct MockBackend {
    model_id: String,
    available: AtomicBool,
    capabilities: ModelCapabilities,
    response_content: String,
    finish_reason: FinishReason,
    routes: Vec<(String, String)>,
    failure: Option<String>,
    delay: Option<Duration>,
    call_count: AtomicU32,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockBackend {
    /// Create a new mock backend.
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            available: AtomicBool::new(true),
            capabilities: ModelCapabilities {
                supports_json_mode: true,
                supports_vision: true,
                ..Default::default()
            },
            response_content: "Mock response".to_string(),
            finish_reason: FinishReason::Stop,
            routes: Vec::new(),
            failure: None,
            delay: None,
            call_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Set the response content.
    pub fn with_response(mut self, content: impl Into<String>) -> Self {
        self.response_content = content.into();
        self
    }

    /// Report this finish reason on every reply.
    pub fn with_finish_reason(mut self, finish_reason: FinishReason) -> Self {
        self.finish_reason = finish_reason;
        self
    }

    /// Reply with `content` when the user prompt contains `needle`.
    ///
    /// Routes are checked in insertion order before the default response.
    pub fn with_reply_for(mut self, needle: impl Into<String>, content: impl Into<String>) -> Self {
        self.routes.push((needle.into(), content.into()));
        self
    }

    /// Fail every completion with a request error.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Wait before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set availability.
    pub fn with_available(self, available: bool) -> Self {
        self.available.store(available, Ordering::SeqCst);
        self
    }

    /// Set capabilities.
    pub fn with_capabilities(mut self, capabilities: ModelCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Get the number of times complete was called.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Most recent request, if any.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests().pop()
    }

    fn reply_for(&self, request: &CompletionRequest) -> &str {
        let prompt = request.last_user_message().unwrap_or_default();
        self.routes
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, content)| content.as_str())
            .unwrap_or(self.response_content.as_str())
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new("mock-model")
    }
}

#[async_trait]
impl LlmBackend for MockBackend {
    fn id(&self) -> &str {
        &self.model_id
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if !self.available.load(Ordering::SeqCst) {
            return Err(LlmError::Unavailable("Mock backend disabled".to_string()));
        }
        if let Some(message) = &self.failure {
            return Err(LlmError::RequestFailed(message.clone()));
        }

        let content = self.reply_for(&request).to_string();

        // Estimate token counts
        let prompt_tokens: u32 = request
            .messages
            .iter()
            .map(|m| m.content.len() as u32 / 4)
            .sum();
        let completion_tokens = content.len() as u32 / 4;

        Ok(CompletionResponse {
            content,
            finish_reason: self.finish_reason,
            usage: Usage {
                prompt_tokens,
                completion_tokens,
            },
        })
    }

    fn capabilities(&self) -> &ModelCapabilities {
        &self.capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend() {
        let backend = MockBackend::new("test-model").with_response("Hello, world!");

        assert!(backend.is_available().await);
        assert_eq!(backend.call_count(), 0);

        let response = backend
            .complete(CompletionRequest::user("Hi"))
            .await
            .unwrap();

        assert_eq!(response.content, "Hello, world!");
        assert_eq!(backend.call_count(), 1);
        assert_eq!(backend.last_request().unwrap().last_user_message(), Some("Hi"));
    }

    #[tokio::test]
    async fn test_mock_routes() {
        let backend = MockBackend::default()
            .with_response("default")
            .with_reply_for("coat", "warm");

        let routed = backend.complete(CompletionRequest::user("a winter coat")).await.unwrap();
        let fallback = backend.complete(CompletionRequest::user("lentils")).await.unwrap();

        assert_eq!(routed.content, "warm");
        assert_eq!(fallback.content, "default");
        assert_eq!(backend.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_unavailable() {
        let backend = MockBackend::new("test-model").with_available(false);

        assert!(!backend.is_available().await);
        tokio_test::assert_err!(backend.complete(CompletionRequest::user("Hi")).await);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let backend = MockBackend::default().with_failure("boom");
        let result = backend.complete(CompletionRequest::user("Hi")).await;

        assert!(matches!(result, Err(LlmError::RequestFailed(m)) if m == "boom"));
        assert_eq!(backend.call_count(), 1);
    }
}
