// src/application/error_handling.rs
//
// User-facing error mapping
//
// - Maps internal errors to a category plus a short message
// - Never shows SQL or transport details to the user
// - Logs the full error for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Error as the view shows it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Rejected input or an operation not allowed right now
    Validation,

    /// Catalog unreachable or answered with something unreadable
    Network,

    /// Favorites could not be read or written
    Storage,

    Configuration,

    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => Self::new(
                ErrorType::Validation,
                "Invalid movie",
                Some(domain_error.to_string()),
            ),

            AppError::InvalidState(message) => Self::new(ErrorType::Validation, &message, None),

            AppError::Network(message) | AppError::MalformedResponse(message) => {
                log::warn!("Catalog error: {}", message);
                Self::new(
                    ErrorType::Network,
                    "Could not load data from the movie catalog",
                    Some(message),
                )
            }

            AppError::StoreUnavailable(message) | AppError::Pool(message) => {
                log::error!("Favorites store error: {}", message);
                Self::new(ErrorType::Storage, "Favorites are unavailable right now", None)
            }

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(ErrorType::Storage, "Favorites are unavailable right now", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(ErrorType::Storage, "File system operation failed", Some(io_error.to_string()))
            }

            AppError::Config(message) => {
                Self::new(ErrorType::Configuration, "Configuration error", Some(message))
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, &message, None)
            }
        }
    }

    fn new(error_type: ErrorType, message: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.to_string(),
            details,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}
