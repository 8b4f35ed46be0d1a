//! # neurosync-retrieval
//!
//! Ranks knowledge-catalog activities against a check-in transcript plus
//! mood signals. Query = transcript + synthetic mood descriptor, projected
//! into the catalog's TF-IDF space and scored by cosine similarity.

pub mod descriptor;
pub mod engine;
pub mod similarity;

pub use engine::ActivityRetriever;
