use async_trait::async_trait;
use classvision::{
    Error, Result,
    llm::{AssistantMessage, Choice, CompletionClient, CompletionRequest, CompletionResponse},
};
use std::sync::{Arc, Mutex};

/// Mock completion client for testing
#[derive(Debug)]
pub struct MockCompletionClient {
    pub responses: Arc<Mutex<Vec<CompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub error: Option<String>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<CompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn create_completion(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::upstream("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_mock_completion_response(content: &str) -> CompletionResponse {
    CompletionResponse {
        id: "test-id".to_string(),
        model: "test-model".to_string(),
        choices: vec![Choice {
            index: 0,
            message: AssistantMessage {
                content: content.to_string(),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}

pub fn create_mock_empty_response() -> CompletionResponse {
    CompletionResponse {
        id: "test-id".to_string(),
        model: "test-model".to_string(),
        choices: vec![],
        usage: None,
    }
}
