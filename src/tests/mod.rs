
use crate::backend::{BackendError, ChatBackend, ChatRequest};
use crate::elements::{Dataset, Element};
use std::sync::Mutex;

/// Backend stub that records requests and replays a fixed outcome
pub struct StubBackend {
    reply: Result<String, String>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubBackend {
    pub fn answering(answer: &str) -> Self {
        Self {
            reply: Ok(answer.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl ChatBackend for StubBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<String, BackendError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(BackendError::Transport)
    }
}

/// The single-element page used across tests
pub fn hello_dataset() -> Dataset {
    Dataset::new(vec![
        Element::new("TEXT", "#a").with_field("text", "Hello world"),
    ])
}

pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        Element::new("TEXT", "h1.title").with_field("text", "Pricing"),
        Element::new("TEXT", "p.lead").with_field("text", "Plans start at $10 per month."),
        Element::new("LINK", "a.faq")
            .with_field("text", "FAQ")
            .with_field("href", "https://example.com/faq"),
    ])
}
