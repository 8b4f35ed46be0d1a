use crate::errors::NeuroResult;

/// Hosted generative-model seam.
///
/// Implementations make exactly one attempt per call; retry policy is not
/// part of this contract.
pub trait IPlanModel: Send + Sync {
    /// Send a prompt, return the raw response text.
    fn generate(&self, prompt: &str) -> NeuroResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider can currently serve requests.
    fn is_available(&self) -> bool;
}
