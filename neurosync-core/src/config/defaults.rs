//! Named default values for every config knob.

/// Candidates the retriever hands the synthesizer.
pub const DEFAULT_TOP_K: usize = 8;

/// Minimum token length the vectorizer keeps.
pub const DEFAULT_MIN_TERM_LEN: usize = 3;

/// Activities included in a plan.
pub const DEFAULT_MAX_ACTIVITIES: usize = 4;

/// Hosted model identifier.
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.0-flash";

/// Generative Language API base.
pub const DEFAULT_MODEL_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Single-attempt request timeout.
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 30;

/// Sampling temperature for plan generation.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Output token cap for plan generation.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1000;

/// Catalog location relative to the process working directory.
pub const DEFAULT_CATALOG_PATH: &str = "knowledge_base.json";
