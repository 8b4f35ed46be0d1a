//! Prompt construction for the hosted model.

use neurosync_core::models::{Activity, MoodContext};

/// Build the plan-generation prompt: user context, serialized candidate
/// activities, and the exact output contract the model must honor.
pub fn build(transcript: &str, mood: &MoodContext, candidates: &[Activity]) -> String {
    let serialized =
        serde_json::to_string_pretty(candidates).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"You are a compassionate mental health assistant. Create a personalized wellness plan.

USER CONTEXT:
- Transcript: "{transcript}"
- Mood Score: {mood_score:.2} (0=very negative, 1=very positive)
- Anxiety Score: {anxiety_score:.2} (0=calm, 1=very anxious)
- Crisis Detected: {crisis_flag}

AVAILABLE ACTIVITIES:
{serialized}

TASK: Create a warm, personalized wellness plan. Select 3-4 activities from the list above.

RETURN EXACTLY THIS JSON STRUCTURE (no markdown, no extra text):
{{
  "immediate_actions": ["Action 1 in 1-2 sentences", "Action 2", "Action 3"],
  "activities": ["Activity 1 description", "Activity 2", "Activity 3", "Activity 4"],
  "music_recommendation": {{
    "needed": true,
    "description": "Why music helps and what mood to target"
  }}
}}

Keep it warm, actionable, and encouraging. Use simple language."#,
        mood_score = mood.mood_score,
        anxiety_score = mood.anxiety_score,
        crisis_flag = mood.crisis_flag,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_context_and_candidates() {
        let mood = MoodContext::new(0.25, 0.8, true);
        let candidates = vec![Activity {
            name: "Box Breathing".into(),
            description: "slow breathing".into(),
            steps: vec![],
            duration_minutes: 5,
            best_for: vec!["anxiety".into()],
            category: "breathing".into(),
        }];
        let prompt = build("rough day at work", &mood, &candidates);
        assert!(prompt.contains("rough day at work"));
        assert!(prompt.contains("Mood Score: 0.25"));
        assert!(prompt.contains("Anxiety Score: 0.80"));
        assert!(prompt.contains("Crisis Detected: true"));
        assert!(prompt.contains("Box Breathing"));
        assert!(prompt.contains("immediate_actions"));
    }

    #[test]
    fn empty_candidate_list_serializes_as_empty_array() {
        let mood = MoodContext::new(0.5, 0.5, false);
        let prompt = build("", &mood, &[]);
        assert!(prompt.contains("[]"));
    }
}
