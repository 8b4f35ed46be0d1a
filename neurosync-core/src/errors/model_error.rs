/// Hosted-model client errors.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model credentials missing for {provider}")]
    MissingCredentials { provider: String },

    #[error("model request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("model transport error: {reason}")]
    Transport { reason: String },

    #[error("model returned no candidates")]
    EmptyResponse,
}
