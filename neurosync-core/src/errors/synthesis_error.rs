/// Plan-synthesis errors. These never reach callers: the synthesizer
/// logs them and falls back to the template plan.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("model response is not valid JSON: {reason}")]
    MalformedResponse { reason: String },

    #[error("plan is missing required field {field}")]
    MissingField { field: String },

    #[error("plan field {field} has the wrong shape: {reason}")]
    InvalidField { field: String, reason: String },
}
