use serde::{Deserialize, Serialize};

use super::defaults;

/// Hosted generative-model configuration.
///
/// An empty `api_key` means no model is configured; the synthesizer then
/// runs template-only, which is a degraded mode and not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    /// Caller-supplied bound on the single model attempt.
    pub timeout_secs: u64,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: defaults::DEFAULT_MODEL_NAME.to_string(),
            endpoint: defaults::DEFAULT_MODEL_ENDPOINT.to_string(),
            timeout_secs: defaults::DEFAULT_MODEL_TIMEOUT_SECS,
            temperature: defaults::DEFAULT_TEMPERATURE,
            max_output_tokens: defaults::DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl ModelConfig {
    /// Whether enough is configured to attempt model calls.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
