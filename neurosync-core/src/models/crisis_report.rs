use serde::{Deserialize, Serialize};

/// Severity ladder produced by crisis detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Moderate,
    High,
    Severe,
}

/// Detailed crisis analysis of a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisReport {
    pub crisis_detected: bool,
    pub severity: Severity,
    /// Risk score in `[0, 1]`, rounded to two decimals.
    pub risk_score: f64,
    /// Matched phrases, capped at five for privacy.
    pub matched_keywords: Vec<String>,
    pub recommended_action: String,
    /// Whether any protective phrases were present.
    pub protective_factors: bool,
}
