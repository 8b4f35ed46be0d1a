//! Template plans used whenever no model is configured or a model response
//! fails validation. Every path through here produces a complete plan.

use neurosync_core::constants::MAX_PLAN_ACTIVITIES;
use neurosync_core::models::{Activity, MoodContext, MusicRecommendation, WellnessPlan};

/// Build a rule-based plan from the mood context and retrieved candidates.
pub fn build(context: &MoodContext, candidates: &[Activity]) -> WellnessPlan {
    WellnessPlan {
        immediate_actions: immediate_actions(context.mood_score, context.crisis_flag),
        activities: activity_lines(candidates),
        music_recommendation: music_recommendation(context.mood_score, context.anxiety_score),
    }
}

fn immediate_actions(mood_score: f64, crisis: bool) -> Vec<String> {
    let actions: [&str; 3] = if crisis || mood_score < 0.2 {
        [
            "Take slow, deep breaths. Inhale for 4 counts, hold for 4, exhale for 4.",
            "If you're feeling overwhelmed, reach out to someone you trust right now.",
            "Remember: This feeling will pass. You've gotten through difficult moments before.",
        ]
    } else if mood_score < 0.4 {
        [
            "Start with a simple breathing exercise to calm your nervous system.",
            "Do one small, manageable thing right now - even just washing your face.",
            "Be gentle with yourself. It's okay to not be okay sometimes.",
        ]
    } else if mood_score < 0.6 {
        [
            "Take a moment to notice your breathing and relax your shoulders.",
            "Consider doing a quick 5-minute activity to shift your energy.",
            "Stay hydrated and make sure you've eaten something today.",
        ]
    } else {
        [
            "You're doing well! Keep this positive momentum going.",
            "Consider an activity that brings you joy or helps you relax.",
            "Take a moment to appreciate how you're feeling right now.",
        ]
    };
    actions.iter().map(|s| s.to_string()).collect()
}

fn activity_lines(candidates: &[Activity]) -> Vec<String> {
    if candidates.is_empty() {
        return vec![
            "Take 5 slow, deep breaths".to_string(),
            "Drink a glass of water".to_string(),
            "Step outside for fresh air if possible".to_string(),
            "Write down one thing you're grateful for".to_string(),
        ];
    }
    candidates
        .iter()
        .take(MAX_PLAN_ACTIVITIES)
        .map(format_activity)
        .collect()
}

fn format_activity(activity: &Activity) -> String {
    if !activity.description.is_empty() {
        format!(
            "{}: {} ({} minutes)",
            activity.name, activity.description, activity.duration_minutes
        )
    } else if !activity.steps.is_empty() {
        let steps = activity
            .steps
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {} ({} minutes)", activity.name, steps, activity.duration_minutes)
    } else {
        format!("{} ({} minutes)", activity.name, activity.duration_minutes)
    }
}

fn music_recommendation(mood_score: f64, anxiety_score: f64) -> MusicRecommendation {
    let description = if anxiety_score > 0.6 {
        "Calming, slow-tempo music can help reduce anxiety and promote relaxation."
    } else if mood_score < 0.4 {
        "Gentle, uplifting music can help improve your mood and provide comfort."
    } else {
        "Music that matches your current mood can be therapeutic and grounding."
    };
    MusicRecommendation {
        needed: true,
        description: description.to_string(),
    }
}
