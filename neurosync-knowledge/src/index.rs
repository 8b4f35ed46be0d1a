//! The immutable activity index: flattened catalog + fitted vector space
//! + per-activity document vectors. Built once at startup; concurrent
//! readers share it without locking because nothing ever mutates it.

use std::path::Path;

use neurosync_core::config::KnowledgeConfig;
use neurosync_core::errors::NeuroResult;
use neurosync_core::models::Activity;
use tracing::info;

use crate::catalog::Catalog;
use crate::vectorizer::TfIdfVectorizer;

/// Flattened catalog with its TF-IDF space.
#[derive(Debug, Clone)]
pub struct ActivityIndex {
    activities: Vec<Activity>,
    vectorizer: TfIdfVectorizer,
    doc_vectors: Vec<Vec<f64>>,
}

impl ActivityIndex {
    /// Build the index from a loaded catalog.
    pub fn build(catalog: &Catalog, config: &KnowledgeConfig) -> Self {
        let activities = catalog.flatten();
        let documents: Vec<String> = activities.iter().map(Activity::document_text).collect();
        let vectorizer = TfIdfVectorizer::fit(&documents, config.min_term_len);
        let doc_vectors = documents
            .iter()
            .map(|doc| vectorizer.transform(doc))
            .collect();

        info!(
            activities = activities.len(),
            vocab = vectorizer.vocab_len(),
            "activity index built"
        );

        Self {
            activities,
            vectorizer,
            doc_vectors,
        }
    }

    /// Load the catalog from `config.catalog_path` and build the index.
    /// Fatal if the catalog is missing or malformed.
    pub fn open(config: &KnowledgeConfig) -> NeuroResult<Self> {
        let catalog = Catalog::load(Path::new(&config.catalog_path))?;
        Ok(Self::build(&catalog, config))
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// All indexed activities, in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Document vector for the activity at `idx`.
    pub fn doc_vector(&self, idx: usize) -> &[f64] {
        &self.doc_vectors[idx]
    }

    /// Project a query into the index's vector space.
    pub fn query_vector(&self, query: &str) -> Vec<f64> {
        self.vectorizer.transform(query)
    }
}
