//! # neurosync-core
//!
//! Foundation crate for the NeuroSync wellness-plan engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NeuroConfig;
pub use errors::{NeuroError, NeuroResult};
pub use models::{
    Activity, CrisisReport, MoodContext, MusicRecommendation, PlanOutcome, PlanSource, Severity,
    WellnessPlan,
};
pub use traits::{IActivityRetriever, IPlanModel};
