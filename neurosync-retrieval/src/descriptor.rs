//! Synthetic mood descriptor: buckets the numeric scores into fixed bands
//! of descriptor tokens so that an empty transcript still yields a usable
//! query.

/// Descriptor tokens for a mood score in `[0, 1]`.
pub fn mood_tokens(mood_score: f64) -> &'static str {
    if mood_score < 0.3 {
        "depression low energy sadness"
    } else if mood_score < 0.5 {
        "stress overwhelm difficulty"
    } else if mood_score < 0.7 {
        "moderate mood neutral"
    } else {
        "positive mood uplifted"
    }
}

/// Descriptor tokens for an anxiety score in `[0, 1]`.
pub fn anxiety_tokens(anxiety_score: f64) -> &'static str {
    if anxiety_score > 0.7 {
        "high anxiety panic worry"
    } else if anxiety_score > 0.4 {
        "stress tension nervousness"
    } else {
        "calm relaxed"
    }
}

/// Full descriptor: mood band followed by anxiety band.
pub fn describe(mood_score: f64, anxiety_score: f64) -> String {
    format!("{} {}", mood_tokens(mood_score), anxiety_tokens(anxiety_score))
}
