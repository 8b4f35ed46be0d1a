//! Plan synthesis: candidate retrieval, one model attempt, template fallback.

use chrono::Utc;
use tracing::{debug, info, warn};

use neurosync_core::config::SynthesisConfig;
use neurosync_core::models::{MoodContext, PlanOutcome, PlanSource};
use neurosync_core::traits::{IActivityRetriever, IPlanModel};
use neurosync_core::NeuroResult;

use crate::{fallback, prompt, response};

/// Orchestrates a single plan generation pass.
///
/// The model is optional and best-effort: any failure on the model path,
/// transport, malformed output, or validation, degrades to the template
/// plan rather than surfacing an error to the caller.
pub struct PlanSynthesizer<'a> {
    retriever: &'a dyn IActivityRetriever,
    model: Option<&'a dyn IPlanModel>,
    config: SynthesisConfig,
}

impl<'a> PlanSynthesizer<'a> {
    pub fn new(retriever: &'a dyn IActivityRetriever, config: SynthesisConfig) -> Self {
        Self {
            retriever,
            model: None,
            config,
        }
    }

    pub fn with_model(mut self, model: &'a dyn IPlanModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Generate a plan for one check-in.
    ///
    /// Retrieval errors are the only errors this returns; everything past
    /// retrieval always yields a plan.
    pub fn generate(
        &self,
        transcript: &str,
        mood_score: f64,
        anxiety_score: f64,
        crisis: bool,
    ) -> NeuroResult<PlanOutcome> {
        let context = MoodContext::new(mood_score, anxiety_score, crisis);
        let candidates = self.retriever.retrieve(
            transcript,
            context.mood_score,
            context.anxiety_score,
            self.config.candidate_count,
        )?;
        debug!(
            candidates = candidates.len(),
            crisis = context.crisis_flag,
            "retrieved plan candidates"
        );

        let (plan, source) = match self.try_model(transcript, &context, &candidates) {
            Some(plan) => (plan, PlanSource::Model),
            None => (fallback::build(&context, &candidates), PlanSource::Template),
        };
        info!(?source, activities = plan.activities.len(), "plan synthesized");

        Ok(PlanOutcome {
            plan,
            source,
            candidates_considered: candidates.len(),
            generated_at: Utc::now(),
        })
    }

    fn try_model(
        &self,
        transcript: &str,
        context: &MoodContext,
        candidates: &[neurosync_core::models::Activity],
    ) -> Option<neurosync_core::models::WellnessPlan> {
        let model = self.model?;
        if !model.is_available() {
            debug!(provider = model.name(), "model not configured, using template");
            return None;
        }
        let prompt = prompt::build(transcript, context, candidates);
        let raw = match model.generate(&prompt) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(provider = model.name(), error = %e, "model call failed, using template");
                return None;
            }
        };
        match response::parse_plan(&raw, self.config.max_activities) {
            Ok(plan) => Some(plan),
            Err(e) => {
                warn!(provider = model.name(), error = %e, "model response rejected, using template");
                None
            }
        }
    }
}
