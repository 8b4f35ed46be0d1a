use neurosync_core::models::*;
use proptest::prelude::*;

fn sample_plan() -> WellnessPlan {
    WellnessPlan {
        immediate_actions: vec![
            "Take slow, deep breaths.".into(),
            "Reach out to someone you trust.".into(),
            "This feeling will pass.".into(),
        ],
        activities: vec!["Box Breathing: Slow square breathing (5 minutes)".into()],
        music_recommendation: MusicRecommendation {
            needed: true,
            description: "Calming, slow-tempo music".into(),
        },
    }
}

#[test]
fn plan_contract_field_names_are_exact() {
    let v: serde_json::Value = serde_json::to_value(sample_plan()).unwrap();
    let obj = v.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["activities", "immediate_actions", "music_recommendation"]
    );
    let music = v["music_recommendation"].as_object().unwrap();
    let mut music_keys: Vec<&str> = music.keys().map(String::as_str).collect();
    music_keys.sort_unstable();
    assert_eq!(music_keys, vec!["description", "needed"]);
}

#[test]
fn plan_parses_from_model_style_json() {
    let json = r#"{
        "immediate_actions": ["a", "b", "c"],
        "activities": ["one", "two", "three", "four"],
        "music_recommendation": {"needed": false, "description": "none needed"}
    }"#;
    let plan: WellnessPlan = serde_json::from_str(json).unwrap();
    assert_eq!(plan.immediate_actions.len(), 3);
    assert_eq!(plan.activities.len(), 4);
    assert!(!plan.music_recommendation.needed);
}

#[test]
fn activity_parses_catalog_entry() {
    let json = r#"{
        "name": "5-4-3-2-1 Grounding",
        "description": "Engage your senses to anchor in the present",
        "steps": ["Name 5 things you see", "Name 4 things you can touch"],
        "duration_minutes": 10,
        "best_for": ["anxiety", "panic", "dissociation"]
    }"#;
    let act: Activity = serde_json::from_str(json).unwrap();
    assert_eq!(act.name, "5-4-3-2-1 Grounding");
    assert_eq!(act.steps.len(), 2);
    assert_eq!(act.duration_minutes, 10);
    assert!(act.category.is_empty());
}

#[test]
fn mood_context_is_copy_and_clamped() {
    let ctx = MoodContext::new(2.0, -1.0, false);
    let copy = ctx;
    assert_eq!(copy.mood_score, 1.0);
    assert_eq!(ctx.anxiety_score, 0.0);
}

proptest! {
    #[test]
    fn mood_context_always_lands_in_unit_range(
        mood in -100.0f64..100.0,
        anxiety in -100.0f64..100.0,
    ) {
        let ctx = MoodContext::new(mood, anxiety, false);
        prop_assert!((0.0..=1.0).contains(&ctx.mood_score));
        prop_assert!((0.0..=1.0).contains(&ctx.anxiety_score));
    }
}

#[test]
fn crisis_report_serializes_severity_ladder() {
    let report = CrisisReport {
        crisis_detected: true,
        severity: Severity::High,
        risk_score: 0.65,
        matched_keywords: vec!["hopeless".into()],
        recommended_action: "URGENT".into(),
        protective_factors: false,
    };
    let v: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(v["severity"], "high");
    assert_eq!(v["risk_score"], 0.65);
}
