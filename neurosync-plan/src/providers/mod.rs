//! Plan model providers.

mod gemini;

pub use gemini::GeminiClient;
