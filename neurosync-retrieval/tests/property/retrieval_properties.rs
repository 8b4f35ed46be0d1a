//! Property tests for activity retrieval.

use neurosync_core::config::{KnowledgeConfig, RetrievalConfig};
use neurosync_core::traits::IActivityRetriever;
use neurosync_knowledge::{ActivityIndex, Catalog};
use neurosync_retrieval::ActivityRetriever;
use proptest::prelude::*;

fn sample_index() -> ActivityIndex {
    let catalog = Catalog::from_json_str(test_fixtures::SAMPLE_CATALOG_JSON).unwrap();
    ActivityIndex::build(&catalog, &KnowledgeConfig::default())
}

proptest! {
    #[test]
    fn retrieval_never_exceeds_catalog_or_top_k(
        mood in 0.0f64..=1.0,
        anxiety in 0.0f64..=1.0,
        top_k in 0usize..32,
    ) {
        let index = sample_index();
        let retriever = ActivityRetriever::new(&index, RetrievalConfig::default());
        let results = retriever
            .retrieve("feeling some kind of way today", mood, anxiety, top_k)
            .unwrap();
        prop_assert!(results.len() <= top_k);
        prop_assert!(results.len() <= retriever.catalog_len());
    }

    #[test]
    fn retrieval_returns_no_duplicates(
        mood in 0.0f64..=1.0,
        anxiety in 0.0f64..=1.0,
    ) {
        let index = sample_index();
        let retriever = ActivityRetriever::new(&index, RetrievalConfig::default());
        let results = retriever
            .retrieve("stressed about work and family", mood, anxiety, 8)
            .unwrap();
        let mut names: Vec<&str> = results.iter().map(|a| a.name.as_str()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        prop_assert_eq!(before, names.len());
    }

    #[test]
    fn retrieval_is_deterministic(
        mood in 0.0f64..=1.0,
        anxiety in 0.0f64..=1.0,
        transcript in "[a-z ]{0,60}",
    ) {
        let index = sample_index();
        let retriever = ActivityRetriever::new(&index, RetrievalConfig::default());
        let a = retriever.retrieve(&transcript, mood, anxiety, 8).unwrap();
        let b = retriever.retrieve(&transcript, mood, anxiety, 8).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn empty_transcript_never_fails(
        mood in 0.0f64..=1.0,
        anxiety in 0.0f64..=1.0,
    ) {
        let index = sample_index();
        let retriever = ActivityRetriever::new(&index, RetrievalConfig::default());
        let results = retriever.retrieve("", mood, anxiety, 8).unwrap();
        prop_assert!(results.len() <= 8);
    }
}

#[test]
fn empty_index_returns_nothing() {
    let catalog = Catalog::from_json_str("{}").unwrap();
    let index = ActivityIndex::build(&catalog, &KnowledgeConfig::default());
    let retriever = ActivityRetriever::new(&index, RetrievalConfig::default());
    let results = retriever.retrieve("anything", 0.5, 0.5, 8).unwrap();
    assert!(results.is_empty());
}
