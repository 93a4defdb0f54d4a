use common::model::ValidationError;
use common::model::id::InvalidDocId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidId(#[from] InvalidDocId),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database connection lock poisoned")]
    Poisoned,

    #[error("Database task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl StoreError {
    /// Short name of the failure, used when logging.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Sqlite(_) => "DatabaseError",
            StoreError::Json(_) => "DocumentError",
            StoreError::InvalidId(_) => "CastError",
            StoreError::Validation(_) => "ValidationError",
            StoreError::Poisoned | StoreError::Blocking(_) => "ConnectionError",
        }
    }
}
