//! Property tests for the plan shape contract: always exactly three
//! immediate actions, at most four activities, for any input.

use proptest::prelude::*;

use neurosync_core::config::{KnowledgeConfig, RetrievalConfig, SynthesisConfig};
use neurosync_knowledge::{ActivityIndex, Catalog};
use neurosync_plan::PlanSynthesizer;
use neurosync_retrieval::ActivityRetriever;
use test_fixtures::SAMPLE_CATALOG_JSON;

fn sample_index() -> ActivityIndex {
    let catalog = Catalog::from_json_str(SAMPLE_CATALOG_JSON).unwrap();
    ActivityIndex::build(&catalog, &KnowledgeConfig::default())
}

proptest! {
    #[test]
    fn template_plans_always_keep_the_contract_shape(
        transcript in "[a-z ]{0,120}",
        mood in 0.0f64..=1.0,
        anxiety in 0.0f64..=1.0,
        crisis in proptest::bool::ANY,
    ) {
        let index = sample_index();
        let retriever = ActivityRetriever::new(&index, RetrievalConfig::default());
        let synthesizer = PlanSynthesizer::new(&retriever, SynthesisConfig::default());

        let outcome = synthesizer.generate(&transcript, mood, anxiety, crisis).unwrap();
        prop_assert_eq!(outcome.plan.immediate_actions.len(), 3);
        prop_assert!(outcome.plan.activities.len() <= 4);
        prop_assert!(!outcome.plan.activities.is_empty());
        prop_assert!(outcome.plan.music_recommendation.needed);
    }

    #[test]
    fn out_of_range_scores_never_panic(
        mood in -10.0f64..10.0,
        anxiety in -10.0f64..10.0,
    ) {
        let index = sample_index();
        let retriever = ActivityRetriever::new(&index, RetrievalConfig::default());
        let synthesizer = PlanSynthesizer::new(&retriever, SynthesisConfig::default());

        let outcome = synthesizer.generate("hard to say how I feel", mood, anxiety, false);
        prop_assert!(outcome.is_ok());
    }
}
