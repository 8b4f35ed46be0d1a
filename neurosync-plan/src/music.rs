//! Mood-keyed music search queries and fallback playlists.

/// Search query tuned to the reported mood and anxiety levels.
pub fn search_query_for(mood_score: f64, anxiety_score: f64) -> &'static str {
    if anxiety_score > 0.6 {
        "peaceful calming meditation ambient sleep"
    } else if mood_score < 0.3 {
        "uplifting hopeful positive encouraging happy"
    } else if mood_score < 0.5 {
        "relaxing chill lo-fi focus study"
    } else {
        "feel good happy upbeat positive vibes"
    }
}

/// Curated playlist used when no search result is available.
pub fn fallback_playlist_url(mood_score: f64) -> &'static str {
    if mood_score < 0.5 {
        "https://open.spotify.com/playlist/37i9dQZF1DWZqd5JICZI0u"
    } else {
        "https://open.spotify.com/playlist/37i9dQZF1DX3rxVfCUTxSu"
    }
}
