pub mod ollama;

use crate::config::DecodingOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use ollama::OllamaBackend;

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// One stateless request: model, ordered messages and decoding options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub options: DecodingOptions,
}

impl ChatRequest {
    /// A (system, user) exchange
    pub fn new(model: &str, system: String, question: String, options: DecodingOptions) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(question)],
            stream: false,
            options,
        }
    }
}

/// Failures talking to a language-model backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Transport(String),

    #[error("backend returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("malformed backend response: {0}")]
    Malformed(String),
}

/// A language-model backend answering one chat request at a time
pub trait ChatBackend {
    /// Sends the request and returns the assistant message text
    fn chat(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<String, BackendError>>;
}

impl<B: ChatBackend> ChatBackend for &B {
    async fn chat(&self, request: &ChatRequest) -> Result<String, BackendError> {
        (**self).chat(request).await
    }
}
