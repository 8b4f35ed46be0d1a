use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wellness_plan::WellnessPlan;

/// Which path produced a plan. Exposed so callers can record telemetry on
/// model health without parsing plan content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// Generated by the hosted model and validated.
    Model,
    /// Produced by the deterministic template fallback.
    Template,
}

/// A generated plan plus provenance metadata.
///
/// The plan itself is the caller-facing contract; the surrounding fields
/// are observability only and are not part of the serialized plan shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub plan: WellnessPlan,
    pub source: PlanSource,
    /// How many catalog activities the retriever offered the synthesizer.
    pub candidates_considered: usize,
    pub generated_at: DateTime<Utc>,
}
