use crate::backend::{BackendError, ChatBackend, ChatRequest};
use serde::Deserialize;
use url::Url;

/// Chat backend speaking the Ollama `/api/chat` protocol
pub struct OllamaBackend {
    client: reqwest::Client,
    endpoint: Url,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OllamaBackend {
    /// Create a backend for the server at `host`, e.g. `http://localhost:11434`
    pub fn new(host: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: chat_endpoint(host)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Resolves the chat endpoint under the server base URL
pub fn chat_endpoint(host: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(host)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("api/chat")
}

/// Extracts the assistant text from a raw `/api/chat` response body
pub fn parse_response(body: &str) -> Result<String, BackendError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| BackendError::Malformed(e.to_string()))?;

    response
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| BackendError::Malformed("missing message.content".to_string()))
}

/// Maps an HTTP status and body to the assistant text or a backend error
pub fn read_response(status: reqwest::StatusCode, body: String) -> Result<String, BackendError> {
    if !status.is_success() {
        return Err(BackendError::Status {
            code: status.as_u16(),
            body,
        });
    }

    parse_response(&body)
}

impl ChatBackend for OllamaBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<String, BackendError> {
        ::log::debug!(
            "POST {} model={} messages={}",
            self.endpoint,
            request.model,
            request.messages.len()
        );

        let res = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        read_response(status, body)
    }
}
