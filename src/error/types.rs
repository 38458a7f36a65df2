// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Connect or read failure talking to the remote catalog
    #[error("Network failure: {0}")]
    Network(String),

    /// Response body could not be parsed or lacked an expected field
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The persistent store rejected or could not perform an operation
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Collapses any persistence-layer failure into `StoreUnavailable`.
    pub fn into_store_error(self) -> AppError {
        match self {
            AppError::Database(e) => AppError::StoreUnavailable(e.to_string()),
            AppError::Pool(msg) => AppError::StoreUnavailable(msg),
            AppError::Io(e) => AppError::StoreUnavailable(e.to_string()),
            other => other,
        }
    }

    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::MalformedResponse(_))
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Other(format!("Worker task failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
