use serde::{Deserialize, Serialize};

use super::defaults;

/// Plan-synthesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Candidate activities retrieved per plan.
    pub candidate_count: usize,
    /// Activities included in the final plan.
    pub max_activities: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            candidate_count: defaults::DEFAULT_TOP_K,
            max_activities: defaults::DEFAULT_MAX_ACTIVITIES,
        }
    }
}
