//! Gemini `generateContent` client.

use std::time::Duration;

use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use neurosync_core::config::ModelConfig;
use neurosync_core::errors::ModelError;
use neurosync_core::traits::IPlanModel;
use neurosync_core::NeuroResult;

/// Blocking HTTP client for the Gemini generative language API.
pub struct GeminiClient {
    config: ModelConfig,
    client: reqwest::blocking::Client,
}

impl GeminiClient {
    pub fn new(config: ModelConfig) -> NeuroResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ModelError::Transport {
                reason: e.to_string(),
            })?;
        Ok(Self { config, client })
    }
}

impl IPlanModel for GeminiClient {
    fn generate(&self, prompt: &str) -> NeuroResult<String> {
        if !self.config.is_configured() {
            return Err(ModelError::MissingCredentials {
                provider: self.name().to_string(),
            }
            .into());
        }

        let request_id = Uuid::new_v4();
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );
        debug!(%request_id, model = %self.config.model, "dispatching generation request");

        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_output_tokens,
            }
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| ModelError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ModelError::RequestFailed {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let value: serde_json::Value = response.json().map_err(|e| ModelError::Transport {
            reason: e.to_string(),
        })?;

        let text = value
            .pointer("/candidates/0/content/parts")
            .and_then(|parts| parts.as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ModelError::EmptyResponse.into());
        }
        debug!(%request_id, chars = text.len(), "generation response received");
        Ok(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn is_available(&self) -> bool {
        self.config.is_configured()
    }
}
