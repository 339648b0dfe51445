//! Canned transport and client builders for tests.

use std::sync::{Arc, Mutex};

use super::http::{ApiClient, ApiError, ApiRequest, RawResponse, Transport};
use super::token::MemoryTokenStore;

/// Replays canned responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<Vec<Result<RawResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn new(responses: Vec<Result<RawResponse, ApiError>>) -> Self {
        Self { responses: Mutex::new(responses), requests: Mutex::new(Vec::new()) }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(ApiError::Network("no canned response".to_owned()));
        }
        responses.remove(0)
    }
}

pub(crate) fn json(status: u16, body: serde_json::Value) -> Result<RawResponse, ApiError> {
    Ok(RawResponse { status, body: body.to_string() })
}

pub(crate) fn client(transport: &Arc<MockTransport>, tokens: &Arc<MemoryTokenStore>) -> ApiClient {
    ApiClient::new("/api", tokens.clone(), transport.clone())
}

pub(crate) fn qr_code_json(id: &str, content: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "userId": "1",
        "content": content,
        "type": "text",
        "createdAt": "2024-03-05T10:00:00.000Z"
    })
}
