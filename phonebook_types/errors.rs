use thiserror::Error;
use uuid::Uuid;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

/// Errors for the durable store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Connection error: {0}")]
    Connection(String),
}

/// Errors for the cross-service statistics call. One failed attempt,
/// no internal retry; redelivery is the caller's concern.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Statistics endpoint answered with status {0}")]
    RemoteStatus(u16),

    #[error("Malformed statistics payload: {0}")]
    MalformedPayload(String),
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: Uuid },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Messaging error: {0}")]
    Messaging(String),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn not_found(resource: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource, id }
    }
}

impl From<sqlx::Error> for ApplicationError {
    fn from(err: sqlx::Error) -> Self {
        ApplicationError::Storage(StorageError::Database(err))
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Infrastructure(err.to_string())
    }
}
