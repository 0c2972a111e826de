use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Decoding parameters sent with every chat request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodingOptions {
    /// Caps the answer length
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Low values favor precise answers
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus-sampling cutoff
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Context window in tokens, sized for the full dataset dump
    #[serde(default = "default_num_ctx")]
    pub num_ctx: u32,
}

impl Default for DecodingOptions {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            num_ctx: default_num_ctx(),
        }
    }
}

/// Configuration of the query agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Model identifier passed to the backend
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Ollama server
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub options: DecodingOptions,

    /// Refuse prompts that would not fit in `options.num_ctx`
    #[serde(default = "default_context_guard")]
    pub context_guard: bool,

    /// Strip `<think>` blocks of reasoning models from answers
    #[serde(default)]
    pub hide_reasoning: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            host: default_host(),
            options: DecodingOptions::default(),
            context_guard: default_context_guard(),
            hide_reasoning: false,
        }
    }
}

impl AgentConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

fn default_model() -> String {
    "deepseek-r1:latest".to_string()
}

fn default_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_context_guard() -> bool {
    true
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.1
}

fn default_top_p() -> f32 {
    0.9
}

fn default_num_ctx() -> u32 {
    16000
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = AgentConfig::from_json(r#"{"model":"llama3","options":{"num_ctx":32000}}"#)
            .unwrap();

        assert_eq!(config.model, "llama3");
        assert_eq!(config.host, "http://localhost:11434");
        assert_eq!(config.options.num_ctx, 32000);
        assert_eq!(config.options.max_tokens, 1000);
        assert!(config.context_guard);
        assert!(!config.hide_reasoning);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"host":"http://gpu-box:11434","hide_reasoning":true}}"#).unwrap();

        let config = AgentConfig::from_file(file.path()).unwrap();
        assert_eq!(config.host, "http://gpu-box:11434");
        assert!(config.hide_reasoning);
        assert_eq!(config.options, DecodingOptions::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AgentConfig::from_json("{not json").is_err());
    }
}
