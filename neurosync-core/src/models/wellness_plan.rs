use serde::{Deserialize, Serialize};

/// The structured wellness plan produced per check-in.
///
/// The serialized shape is the one bit-exact contract of the engine:
/// `{"immediate_actions": [..3], "activities": [..<=4],
/// "music_recommendation": {"needed": bool, "description": str}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessPlan {
    /// Always exactly three entries.
    pub immediate_actions: Vec<String>,
    /// Up to four human-readable activity descriptions.
    pub activities: Vec<String>,
    pub music_recommendation: MusicRecommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicRecommendation {
    pub needed: bool,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_contract_shape() {
        let plan = WellnessPlan {
            immediate_actions: vec!["a".into(), "b".into(), "c".into()],
            activities: vec!["walk".into()],
            music_recommendation: MusicRecommendation {
                needed: true,
                description: "calming".into(),
            },
        };
        let v: serde_json::Value = serde_json::to_value(&plan).unwrap();
        assert!(v["immediate_actions"].is_array());
        assert_eq!(v["immediate_actions"].as_array().unwrap().len(), 3);
        assert!(v["activities"].is_array());
        assert_eq!(v["music_recommendation"]["needed"], true);
        assert_eq!(v["music_recommendation"]["description"], "calming");
        // No extra top-level fields.
        assert_eq!(v.as_object().unwrap().len(), 3);
    }

    #[test]
    fn round_trips_through_json() {
        let plan = WellnessPlan {
            immediate_actions: vec!["x".into(), "y".into(), "z".into()],
            activities: vec![],
            music_recommendation: MusicRecommendation {
                needed: false,
                description: String::new(),
            },
        };
        let json = serde_json::to_string(&plan).unwrap();
        let back: WellnessPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
