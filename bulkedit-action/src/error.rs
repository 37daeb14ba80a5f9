//! Error types for the bulk-edit action.

use thiserror::Error;

/// Result type for host collaborator calls.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Failures reported by the host framework.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("record not found: {entity_type}/{id}")]
    NotFound { entity_type: String, id: String },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("form error: {0}")]
    Form(String),
}

/// Result type for bulk-edit operations.
pub type Result<T> = std::result::Result<T, BulkEditError>;

#[derive(Debug, Error)]
pub enum BulkEditError {
    #[error("host error: {0}")]
    Host(#[from] HostError),

    #[error("model error: {0}")]
    Model(#[from] bulkedit_model::Error),

    #[error("settings error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
