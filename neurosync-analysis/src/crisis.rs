//! Crisis detection with severity levels and a detailed report.
//!
//! Risk = weighted keyword-tier matches minus protective-phrase matches,
//! clamped to [0, 1]. Severity escalates on tier presence, not score alone:
//! one severe phrase outranks any accumulation of moderate ones.

use neurosync_core::constants::MAX_REPORTED_KEYWORDS;
use neurosync_core::models::{CrisisReport, Severity};
use tracing::{debug, warn};

use crate::keywords::{
    ANXIETY_KEYWORDS, DEPRESSION_KEYWORDS, HIGH_RISK_KEYWORDS, INTENSITY_MODIFIERS,
    MODERATE_RISK_KEYWORDS, PROTECTIVE_PHRASES, SEVERE_KEYWORDS,
};

const SEVERE_WEIGHT: f64 = 0.4;
const HIGH_WEIGHT: f64 = 0.25;
const MODERATE_WEIGHT: f64 = 0.1;
const PROTECTIVE_WEIGHT: f64 = 0.15;

/// Stateless transcript analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrisisDetector;

impl CrisisDetector {
    pub fn new() -> Self {
        Self
    }

    /// Full crisis analysis of a transcript.
    pub fn detect(&self, text: &str) -> CrisisReport {
        let lower = text.to_lowercase();

        let severe: Vec<&str> = matches_in(&lower, SEVERE_KEYWORDS);
        let high: Vec<&str> = matches_in(&lower, HIGH_RISK_KEYWORDS);
        let moderate: Vec<&str> = matches_in(&lower, MODERATE_RISK_KEYWORDS);
        let protective: Vec<&str> = matches_in(&lower, PROTECTIVE_PHRASES);

        let raw = severe.len() as f64 * SEVERE_WEIGHT
            + high.len() as f64 * HIGH_WEIGHT
            + moderate.len() as f64 * MODERATE_WEIGHT
            - protective.len() as f64 * PROTECTIVE_WEIGHT;
        let risk_score = round2(raw.clamp(0.0, 1.0));

        let (severity, crisis_detected, recommended_action) = if !severe.is_empty() {
            (
                Severity::Severe,
                true,
                "IMMEDIATE: Contact emergency services (988/911) and notify all emergency contacts",
            )
        } else if !high.is_empty() || risk_score >= 0.6 {
            (
                Severity::High,
                true,
                "URGENT: Notify emergency contacts and encourage immediate professional help",
            )
        } else if !moderate.is_empty() || risk_score >= 0.3 {
            (
                Severity::Moderate,
                true,
                "MODERATE: Encourage reaching out to therapist or support person",
            )
        } else if risk_score > 0.0 {
            (
                Severity::Low,
                false,
                "MONITOR: Provide extra support and wellness resources",
            )
        } else {
            (Severity::None, false, "Standard wellness plan")
        };

        if crisis_detected {
            warn!(?severity, risk_score, "crisis signals detected in transcript");
        } else {
            debug!(?severity, risk_score, "transcript analyzed");
        }

        // Matched phrases in tier order, capped for privacy.
        let matched_keywords: Vec<String> = severe
            .into_iter()
            .chain(high)
            .chain(moderate)
            .take(MAX_REPORTED_KEYWORDS)
            .map(String::from)
            .collect();

        CrisisReport {
            crisis_detected,
            severity,
            risk_score,
            matched_keywords,
            recommended_action: recommended_action.to_string(),
            protective_factors: !protective.is_empty(),
        }
    }

    /// Anxiety level from 0.0 (calm) to 1.0 (severe).
    ///
    /// Keyword matches contribute up to 0.8; intensity modifiers add up
    /// to 0.2 on top.
    pub fn anxiety_score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let matches = matches_in(&lower, ANXIETY_KEYWORDS).len() as f64;
        let modifiers = matches_in(&lower, INTENSITY_MODIFIERS).len() as f64;

        let base = (matches / 8.0).min(0.8);
        let boost = (modifiers / 10.0).min(0.2);
        round2((base + boost).min(1.0))
    }

    /// Depression indicator score from 0.0 to 1.0.
    pub fn depression_score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let matches = matches_in(&lower, DEPRESSION_KEYWORDS).len() as f64;
        round2((matches / 10.0).min(1.0))
    }
}

fn matches_in<'a>(lower_text: &str, phrases: &'a [&'a str]) -> Vec<&'a str> {
    phrases
        .iter()
        .copied()
        .filter(|phrase| lower_text.contains(phrase))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
