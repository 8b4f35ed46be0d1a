use serde::{Deserialize, Serialize};

/// Per-request mood signals supplied by the caller.
///
/// Scores are already-validated floats in `[0, 1]`; construction clamps
/// out-of-range values rather than erroring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoodContext {
    /// 0 = very negative, 1 = very positive.
    pub mood_score: f64,
    /// 0 = calm, 1 = very anxious.
    pub anxiety_score: f64,
    pub crisis_flag: bool,
}

impl MoodContext {
    pub fn new(mood_score: f64, anxiety_score: f64, crisis_flag: bool) -> Self {
        Self {
            mood_score: mood_score.clamp(0.0, 1.0),
            anxiety_score: anxiety_score.clamp(0.0, 1.0),
            crisis_flag,
        }
    }
}
