//! Domain models for the NeuroSync engine.

mod activity;
mod crisis_report;
mod mood_context;
mod plan_outcome;
mod wellness_plan;

pub use activity::Activity;
pub use crisis_report::{CrisisReport, Severity};
pub use mood_context::MoodContext;
pub use plan_outcome::{PlanOutcome, PlanSource};
pub use wellness_plan::{MusicRecommendation, WellnessPlan};
