//! Trait seams between subsystems, defined here so downstream crates can
//! depend on the interface without depending on each other.

mod model;
mod retriever;

pub use model::IPlanModel;
pub use retriever::IActivityRetriever;
