//! # neurosync-plan
//!
//! Turns retrieved activities plus mood signals into a wellness plan.
//! The hosted model is one attempt behind a trait seam; every failure
//! mode lands on the deterministic template fallback, so callers always
//! receive a complete plan.

pub mod fallback;
pub mod music;
pub mod prompt;
pub mod providers;
pub mod response;
pub mod synthesizer;

pub use providers::GeminiClient;
pub use synthesizer::PlanSynthesizer;
