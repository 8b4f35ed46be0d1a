//! Error taxonomy for the NeuroSync engine.
//!
//! Per-subsystem enums plus a top-level `NeuroError` that everything
//! converts into. Synthesis and model errors are absorbed by the template
//! fallback at the synthesizer boundary; knowledge errors are fatal at
//! startup.

mod knowledge_error;
mod model_error;
mod synthesis_error;

pub use knowledge_error::KnowledgeError;
pub use model_error::ModelError;
pub use synthesis_error::SynthesisError;

/// Top-level error type for the NeuroSync engine.
#[derive(Debug, thiserror::Error)]
pub enum NeuroError {
    #[error("knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("config parse error: {reason}")]
    ConfigParse { reason: String },
}

/// Convenience result alias used across the workspace.
pub type NeuroResult<T> = Result<T, NeuroError>;
