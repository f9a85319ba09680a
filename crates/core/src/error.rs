#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Backend did not respond within {secs}s")]
    BackendTimeout { secs: u64 },

    #[error("Tool submission requires a backend connection")]
    SubmissionRequiresBackend,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity,
            key: key.into(),
        }
    }
}
