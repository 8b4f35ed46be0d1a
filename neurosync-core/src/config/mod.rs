//! Engine configuration. All sections are serde-deserializable with full
//! defaults, so an empty TOML document yields a working config.

pub mod defaults;
mod knowledge_config;
mod model_config;
mod retrieval_config;
mod synthesis_config;

pub use defaults as config_defaults;
pub use knowledge_config::KnowledgeConfig;
pub use model_config::ModelConfig;
pub use retrieval_config::RetrievalConfig;
pub use synthesis_config::SynthesisConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{NeuroError, NeuroResult};

/// Top-level configuration aggregating all subsystem sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NeuroConfig {
    pub knowledge: KnowledgeConfig,
    pub retrieval: RetrievalConfig,
    pub synthesis: SynthesisConfig,
    pub model: ModelConfig,
}

impl NeuroConfig {
    /// Parse a TOML document. Unknown keys are ignored; missing sections
    /// fall back to defaults.
    pub fn from_toml_str(input: &str) -> NeuroResult<Self> {
        toml::from_str(input).map_err(|e| NeuroError::ConfigParse {
            reason: e.to_string(),
        })
    }

    /// Load configuration from a TOML file on disk.
    pub fn load(path: &std::path::Path) -> NeuroResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| NeuroError::ConfigParse {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }
}
