//! Model response handling: code-fence stripping, JSON parsing, and shape
//! validation against the plan contract.

use neurosync_core::constants::IMMEDIATE_ACTIONS_LEN;
use neurosync_core::errors::SynthesisError;
use neurosync_core::models::{MusicRecommendation, WellnessPlan};

/// Strip optional markdown code fences from a raw model response.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parse and validate a model response into a plan.
///
/// `max_activities` clamps the activity list; a wrong-length
/// `immediate_actions` is rejected rather than padded, since the caller
/// falls back to the template on any error here. A missing music
/// recommendation is defaulted, not rejected.
pub fn parse_plan(raw: &str, max_activities: usize) -> Result<WellnessPlan, SynthesisError> {
    let text = strip_code_fences(raw);
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| SynthesisError::MalformedResponse {
            reason: e.to_string(),
        })?;

    let actions = value
        .get("immediate_actions")
        .ok_or_else(|| SynthesisError::MissingField {
            field: "immediate_actions".into(),
        })?;
    let actions = as_string_list(actions, "immediate_actions")?;
    if actions.len() != IMMEDIATE_ACTIONS_LEN {
        return Err(SynthesisError::InvalidField {
            field: "immediate_actions".into(),
            reason: format!("expected {IMMEDIATE_ACTIONS_LEN} entries, got {}", actions.len()),
        });
    }

    let activities = value
        .get("activities")
        .ok_or_else(|| SynthesisError::MissingField {
            field: "activities".into(),
        })?;
    let mut activities = as_string_list(activities, "activities")?;
    activities.truncate(max_activities);

    let music_recommendation = match value.get("music_recommendation") {
        Some(music) => MusicRecommendation {
            needed: music.get("needed").and_then(|v| v.as_bool()).unwrap_or(true),
            description: music
                .get("description")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
        },
        None => MusicRecommendation {
            needed: true,
            description: String::new(),
        },
    };

    Ok(WellnessPlan {
        immediate_actions: actions,
        activities,
        music_recommendation,
    })
}

fn as_string_list(value: &serde_json::Value, field: &str) -> Result<Vec<String>, SynthesisError> {
    let array = value.as_array().ok_or_else(|| SynthesisError::InvalidField {
        field: field.into(),
        reason: "not an array".into(),
    })?;
    array
        .iter()
        .map(|v| {
            v.as_str()
                .map(String::from)
                .ok_or_else(|| SynthesisError::InvalidField {
                    field: field.into(),
                    reason: "non-string entry".into(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "immediate_actions": ["breathe", "rest", "hydrate"],
        "activities": ["walk", "journal"],
        "music_recommendation": {"needed": true, "description": "calm playlists"}
    }"#;

    #[test]
    fn parses_a_clean_response() {
        let plan = parse_plan(VALID, 4).unwrap();
        assert_eq!(plan.immediate_actions.len(), 3);
        assert_eq!(plan.activities, vec!["walk", "journal"]);
        assert!(plan.music_recommendation.needed);
    }

    #[test]
    fn strips_json_code_fences() {
        let fenced = format!("```json\n{VALID}\n```");
        assert!(parse_plan(&fenced, 4).is_ok());
    }

    #[test]
    fn strips_bare_code_fences() {
        let fenced = format!("```\n{VALID}\n```");
        assert!(parse_plan(&fenced, 4).is_ok());
    }

    #[test]
    fn non_json_is_a_malformed_response() {
        let err = parse_plan("I'm sorry, I can't produce JSON today.", 4).unwrap_err();
        assert!(matches!(err, SynthesisError::MalformedResponse { .. }));
    }

    #[test]
    fn missing_actions_field_is_rejected() {
        let err = parse_plan(r#"{"activities": []}"#, 4).unwrap_err();
        assert!(matches!(err, SynthesisError::MissingField { .. }));
    }

    #[test]
    fn wrong_action_count_is_rejected() {
        let raw = r#"{"immediate_actions": ["just one"], "activities": []}"#;
        let err = parse_plan(raw, 4).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidField { .. }));
    }

    #[test]
    fn non_array_activities_is_rejected() {
        let raw = r#"{"immediate_actions": ["a", "b", "c"], "activities": "walk"}"#;
        let err = parse_plan(raw, 4).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidField { .. }));
    }

    #[test]
    fn overlong_activity_list_is_clamped() {
        let raw = r#"{
            "immediate_actions": ["a", "b", "c"],
            "activities": ["1", "2", "3", "4", "5", "6"]
        }"#;
        let plan = parse_plan(raw, 4).unwrap();
        assert_eq!(plan.activities.len(), 4);
    }

    #[test]
    fn missing_music_recommendation_is_defaulted() {
        let raw = r#"{"immediate_actions": ["a", "b", "c"], "activities": []}"#;
        let plan = parse_plan(raw, 4).unwrap();
        assert!(plan.music_recommendation.needed);
    }
}
