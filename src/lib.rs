pub mod agent;
pub mod backend;
pub mod config;
pub mod context;
pub mod elements;
pub mod fingerprint;
pub mod loader;
pub mod modes;
pub mod session;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use agent::{Agent, FAILURE_MARKER, NO_DATA_MESSAGE, QueryError, QueryResult, render};
pub use backend::{BackendError, ChatBackend, ChatRequest, OllamaBackend};
pub use config::{AgentConfig, DecodingOptions};
pub use elements::{Dataset, Element};
pub use fingerprint::{ContentFingerprint, fingerprint};
pub use modes::QueryMode;
pub use session::{Session, SessionState};
