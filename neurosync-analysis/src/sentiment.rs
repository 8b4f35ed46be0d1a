//! Mood aggregation from per-utterance sentiment labels, as produced by
//! the transcription service upstream of this engine.

use serde::{Deserialize, Serialize};

/// Sentiment label for one transcript utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Collapse utterance sentiments into a mood score in `[0, 1]`.
///
/// A positive majority maps above 0.5, a negative majority below, and a
/// tie (or no labels at all) sits exactly at the neutral midpoint.
pub fn mood_from_sentiments(sentiments: &[Sentiment]) -> f64 {
    if sentiments.is_empty() {
        return 0.5;
    }

    let total = sentiments.len() as f64;
    let positive = sentiments.iter().filter(|s| **s == Sentiment::Positive).count() as f64;
    let negative = sentiments.iter().filter(|s| **s == Sentiment::Negative).count() as f64;

    if positive > negative {
        0.6 + (positive / total) * 0.3
    } else if negative > positive {
        0.4 - (negative / total) * 0.3
    } else {
        0.5
    }
}
