//! # neurosync-analysis
//!
//! Keyword-tier scoring of check-in transcripts: crisis risk with a
//! severity ladder, anxiety and depression scores, and sentiment-label
//! mood aggregation. Pure text analysis, no network calls.

pub mod crisis;
pub mod keywords;
pub mod sentiment;

pub use crisis::CrisisDetector;
pub use sentiment::{mood_from_sentiments, Sentiment};
