use serde::{Deserialize, Serialize};

use super::defaults;

/// Knowledge store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Path to the catalog JSON file. Missing or malformed files abort
    /// startup.
    pub catalog_path: String,
    /// Tokens shorter than this are dropped by the vectorizer.
    pub min_term_len: usize,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            catalog_path: defaults::DEFAULT_CATALOG_PATH.to_string(),
            min_term_len: defaults::DEFAULT_MIN_TERM_LEN,
        }
    }
}
