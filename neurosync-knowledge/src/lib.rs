//! # neurosync-knowledge
//!
//! Loads the static self-help activity catalog and fits the TF-IDF vector
//! space over it. The resulting `ActivityIndex` is an immutable value:
//! built once at startup, shared read-only across requests.

pub mod catalog;
pub mod index;
pub mod tokenizer;
pub mod vectorizer;

pub use catalog::Catalog;
pub use index::ActivityIndex;
pub use vectorizer::TfIdfVectorizer;
