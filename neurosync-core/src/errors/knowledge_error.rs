/// Knowledge-catalog errors. All of these are configuration errors:
/// they abort startup rather than being recovered at runtime.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("knowledge catalog not found at {path}")]
    CatalogNotFound { path: String },

    #[error("knowledge catalog is malformed: {reason}")]
    CatalogMalformed { reason: String },

    #[error("invalid entry in category {category}: {reason}")]
    InvalidEntry { category: String, reason: String },
}
