// SPDX-FileCopyrightText: 2026 Hawk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock generative-text service for deterministic testing.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use hawk_core::{GenerationRequest, GenerationResponse, GenerativeTextService, HawkError};

/// A scripted reply: text, or an error message surfaced as
/// [`HawkError::Service`].
type Scripted = Result<String, String>;

/// A mock service that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty,
/// `"mock response"` is returned. Every request is recorded.
pub struct MockTextService {
    replies: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
    delay: Option<Duration>,
}

impl MockTextService {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Create a mock pre-loaded with the given replies.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(responses.into_iter().map(Ok).collect())),
            ..Self::new()
        }
    }

    /// Sleep this long before every reply.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Add a reply to the end of the queue.
    pub async fn add_response(&self, text: impl Into<String>) {
        self.replies.lock().await.push_back(Ok(text.into()));
    }

    /// Queue a failure; the matching call returns `HawkError::Service`.
    pub async fn add_error(&self, message: impl Into<String>) {
        self.replies.lock().await.push_back(Err(message.into()));
    }

    /// Requests received so far, in call order.
    pub async fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    async fn next_reply(&self) -> Scripted {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok("mock response".to_string()))
    }
}

impl Default for MockTextService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeTextService for MockTextService {
    fn name(&self) -> &str {
        "mock-text-service"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, HawkError> {
        let model = request.model.clone();
        self.requests.lock().await.push(request);
        let reply = self.next_reply().await;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Ok(text) => Ok(GenerationResponse { text, model }),
            Err(message) => Err(HawkError::Service {
                message,
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest {
            model: "test-model".to_string(),
            system_instruction: "be brief".to_string(),
            prompt: prompt.to_string(),
        }
    }

    #[tokio::test]
    async fn default_response_when_queue_empty() {
        let service = MockTextService::new();
        let resp = service.generate(request("hi")).await.unwrap();
        assert_eq!(resp.text, "mock response");
        assert_eq!(resp.model, "test-model");
    }

    #[tokio::test]
    async fn queued_responses_returned_in_order() {
        let service =
            MockTextService::with_responses(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(service.generate(request("a")).await.unwrap().text, "first");
        assert_eq!(service.generate(request("b")).await.unwrap().text, "second");
        assert_eq!(
            service.generate(request("c")).await.unwrap().text,
            "mock response"
        );
    }

    #[tokio::test]
    async fn queued_error_is_service_error() {
        let service = MockTextService::new();
        service.add_error("quota exceeded").await;
        service.add_response("after").await;

        let err = service.generate(request("a")).await.unwrap_err();
        assert!(matches!(err, HawkError::Service { ref message, .. } if message == "quota exceeded"));
        assert_eq!(service.generate(request("b")).await.unwrap().text, "after");
    }

    #[tokio::test]
    async fn requests_are_captured() {
        let service = MockTextService::new();
        service.generate(request("one")).await.unwrap();
        service.generate(request("two")).await.unwrap();

        let prompts: Vec<_> = service
            .requests()
            .await
            .into_iter()
            .map(|r| r.prompt)
            .collect();
        assert_eq!(prompts, vec!["one", "two"]);
        assert_eq!(service.call_count().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_applies_before_reply() {
        let service = MockTextService::new().with_delay(Duration::from_secs(5));
        let started = tokio::time::Instant::now();
        service.generate(request("slow")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(5));
    }
}
