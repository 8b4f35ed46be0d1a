use crate::errors::NeuroResult;
use crate::models::Activity;

/// Activity retrieval seam consumed by the plan synthesizer.
pub trait IActivityRetriever: Send + Sync {
    /// Return up to `top_k` activities ranked by relevance to the
    /// transcript and mood signals, most relevant first.
    ///
    /// Never returns more activities than the catalog holds, never
    /// returns duplicates, and never fails on empty input.
    fn retrieve(
        &self,
        transcript: &str,
        mood_score: f64,
        anxiety_score: f64,
        top_k: usize,
    ) -> NeuroResult<Vec<Activity>>;

    /// Number of activities in the backing catalog.
    fn catalog_len(&self) -> usize;
}
