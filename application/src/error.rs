use std::io;
use thiserror::Error;

use domain::canvas::LayerRole;
use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Missing required image fields: {fields}")]
    MissingFields { fields: String },

    #[error("Field {field} is empty after whitespace cleaning")]
    EmptyAfterCleaning { field: String },

    #[error("Invalid base64 for {field}: {message}")]
    InvalidEncoding { field: String, message: String },

    #[error("Failed to decode {role} as an image: {message}")]
    DecodeError { role: LayerRole, message: String },

    #[error("Failed to encode composite image: {message}")]
    EncodeError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal server error")]
    InternalServerError,
}

impl AppError {
    /// Client-class errors are the caller's fault and map to 4xx; everything
    /// else is a pipeline failure and maps to 5xx.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingFields { .. }
                | Self::EmptyAfterCleaning { .. }
                | Self::InvalidEncoding { .. }
                | Self::JsonError(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
