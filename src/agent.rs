use crate::backend::{BackendError, ChatBackend, ChatRequest};
use crate::config::AgentConfig;
use crate::context::{assemble, build_system_prompt};
use crate::elements::Dataset;
use crate::fingerprint::{ContentFingerprint, fingerprint};
use crate::modes::QueryMode;
use regex::Regex;
use std::path::Path;
use thiserror::Error;

/// Prefix of every user-facing failure message
pub const FAILURE_MARKER: &str = "❌";

/// Shown instead of contacting the backend when nothing was loaded
pub const NO_DATA_MESSAGE: &str =
    "No data available for analysis. Make sure the scraper saved data to the JSON file.";

/// Why a query produced no answer
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{}", NO_DATA_MESSAGE)]
    NoData,

    #[error("prompt needs about {estimated} tokens but the context window is {limit}")]
    ContextOverflow { estimated: usize, limit: usize },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub type QueryResult = Result<String, QueryError>;

/// Renders a query result as printable text; failures carry [`FAILURE_MARKER`]
pub fn render(result: QueryResult) -> String {
    match result {
        Ok(answer) => answer,
        Err(QueryError::NoData) => format!("{} {}", FAILURE_MARKER, NO_DATA_MESSAGE),
        Err(e) => format!("{} Error: {}", FAILURE_MARKER, e),
    }
}

/// Rough token estimate: four characters per token, rounded up
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}

/// Answers questions about one page snapshot using a language-model backend
pub struct Agent<B> {
    dataset: Dataset,
    fingerprint: ContentFingerprint,
    backend: B,
    config: AgentConfig,
    reasoning: Option<Regex>,
}

impl<B: ChatBackend> Agent<B> {
    /// Create an agent over an already-loaded dataset
    pub fn new(dataset: Dataset, backend: B, config: AgentConfig) -> Self {
        let fingerprint = fingerprint(&dataset);
        let reasoning = if config.hide_reasoning {
            Regex::new(r"(?s)<think>.*?</think>\s*").ok()
        } else {
            None
        };

        Self {
            dataset,
            fingerprint,
            backend,
            config,
            reasoning,
        }
    }

    /// Create an agent over the dump at `source`; a missing or broken dump gives an empty dataset
    pub fn from_source(source: impl AsRef<Path>, backend: B, config: AgentConfig) -> Self {
        Self::new(crate::loader::load(source), backend, config)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn fingerprint(&self) -> &ContentFingerprint {
        &self.fingerprint
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The full system prompt, rebuilt from the dataset on every call
    pub fn system_prompt(&self) -> String {
        build_system_prompt(&assemble(&self.dataset))
    }

    /// Sends one (system prompt, question) exchange to the backend
    pub async fn execute(&self, question: &str) -> QueryResult {
        if self.dataset.is_empty() {
            return Err(QueryError::NoData);
        }

        let system_prompt = self.system_prompt();

        if self.config.context_guard {
            let estimated = estimate_tokens(&system_prompt) + estimate_tokens(question);
            let limit = self.config.options.num_ctx as usize;
            if estimated > limit {
                ::log::warn!(
                    "Prompt of ~{} tokens exceeds context window of {}",
                    estimated,
                    limit
                );
                return Err(QueryError::ContextOverflow { estimated, limit });
            }
        }

        let request = ChatRequest::new(
            &self.config.model,
            system_prompt,
            question.to_string(),
            self.config.options,
        );

        match self.backend.chat(&request).await {
            Ok(answer) => Ok(self.clean_answer(answer)),
            Err(e) => {
                ::log::error!("Error communicating with model: {}", e);
                Err(e.into())
            }
        }
    }

    /// Runs a question through the given mode
    pub async fn query(&self, mode: QueryMode, input: &str) -> QueryResult {
        self.execute(&mode.question(input)).await
    }

    pub async fn ask(&self, question: &str) -> QueryResult {
        self.query(QueryMode::FreeForm, question).await
    }

    pub async fn analyze_topic(&self, topic: &str) -> QueryResult {
        self.query(QueryMode::Topic, topic).await
    }

    pub async fn find_related_links(&self, topic: &str) -> QueryResult {
        self.query(QueryMode::RelatedLinks, topic).await
    }

    /// Like [`Agent::ask`] but always returns printable text
    pub async fn ask_text(&self, question: &str) -> String {
        render(self.ask(question).await)
    }

    fn clean_answer(&self, answer: String) -> String {
        match &self.reasoning {
            Some(re) => re.replace_all(&answer, "").trim().to_string(),
            None => answer,
        }
    }
}
