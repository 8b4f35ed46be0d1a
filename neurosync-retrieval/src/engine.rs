//! ActivityRetriever: implements IActivityRetriever over an ActivityIndex.
//!
//! Pipeline: transcript + mood descriptor → query vector → cosine ranking
//! → stable top-k. Stateless per call; the borrowed index never mutates.

use neurosync_core::config::RetrievalConfig;
use neurosync_core::errors::NeuroResult;
use neurosync_core::models::Activity;
use neurosync_core::traits::IActivityRetriever;
use neurosync_knowledge::ActivityIndex;
use tracing::debug;

use crate::descriptor;
use crate::similarity::cosine_similarity;

/// Mood-aware activity retriever.
pub struct ActivityRetriever<'a> {
    index: &'a ActivityIndex,
    config: RetrievalConfig,
}

impl<'a> ActivityRetriever<'a> {
    pub fn new(index: &'a ActivityIndex, config: RetrievalConfig) -> Self {
        Self { index, config }
    }

    /// The configured default candidate count.
    pub fn default_top_k(&self) -> usize {
        self.config.top_k
    }

    /// Rank every indexed activity against the query, most similar first.
    ///
    /// The sort is stable and descending, so similarity ties keep catalog
    /// insertion order.
    fn rank(&self, query: &str) -> Vec<(usize, f64)> {
        let query_vector = self.index.query_vector(query);
        let mut scored: Vec<(usize, f64)> = (0..self.index.len())
            .map(|i| (i, cosine_similarity(&query_vector, self.index.doc_vector(i))))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored
    }

    /// Retrieve the `top_k` most relevant activities.
    ///
    /// Empty transcripts are fine: the mood descriptor alone forms the
    /// query. Never returns more than the catalog holds.
    pub fn retrieve_top(
        &self,
        transcript: &str,
        mood_score: f64,
        anxiety_score: f64,
        top_k: usize,
    ) -> Vec<Activity> {
        let mood_description = descriptor::describe(mood_score, anxiety_score);
        let query = format!("{transcript} {mood_description}");

        let ranked = self.rank(&query);
        let k = top_k.min(ranked.len());

        debug!(
            candidates = k,
            catalog = self.index.len(),
            "retrieval ranked activities"
        );

        ranked[..k]
            .iter()
            .map(|&(idx, _)| self.index.activities()[idx].clone())
            .collect()
    }
}

impl<'a> IActivityRetriever for ActivityRetriever<'a> {
    fn retrieve(
        &self,
        transcript: &str,
        mood_score: f64,
        anxiety_score: f64,
        top_k: usize,
    ) -> NeuroResult<Vec<Activity>> {
        Ok(self.retrieve_top(transcript, mood_score, anxiety_score, top_k))
    }

    fn catalog_len(&self) -> usize {
        self.index.len()
    }
}
