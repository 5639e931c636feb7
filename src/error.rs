use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::common::ErrorResponse;

pub const SERVER_ERROR_MESSAGE: &str = "server error";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid username or password";
pub const NOT_FOUND_MESSAGE: &str = "endpoint not found";

/// Failures of the backing store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store document is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed request field
    #[error("{0}")]
    Validation(String),

    /// Duplicate email or username
    #[error("{0}")]
    Conflict(String),

    /// Unknown username or wrong password; deliberately indistinguishable
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("request body is not valid JSON: {0}")]
    MalformedBody(serde_json::Error),

    #[error("request body could not be read: {0}")]
    UnreadableBody(#[from] BytesRejection),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("endpoint not found")]
    NotFound,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            // Everything else, internal failures included, surfaces as 400
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Message shown to the client. Internal failures never leak detail.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(message) | AppError::Conflict(message) => message.clone(),
            AppError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            AppError::MalformedBody(_) | AppError::UnreadableBody(_) | AppError::Storage(_) => {
                SERVER_ERROR_MESSAGE.to_string()
            }
            AppError::NotFound => NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MalformedBody(e) => {
                tracing::error!(error = %e, "Failed to parse request body");
            }
            AppError::UnreadableBody(e) => {
                tracing::error!(error = %e, "Failed to read request body");
            }
            AppError::Storage(e) => {
                tracing::error!(error = %e, "Store operation failed");
            }
            AppError::Validation(_) | AppError::Conflict(_) | AppError::InvalidCredentials => {
                tracing::debug!(reason = %self, "Request rejected");
            }
            AppError::NotFound => {}
        }

        (self.status(), Json(ErrorResponse::new(self.client_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_are_masked() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "db.json: denied");
        let err = AppError::from(StoreError::from(io));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), SERVER_ERROR_MESSAGE);

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::MalformedBody(parse);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn business_errors_keep_their_message() {
        let err = AppError::conflict("email already registered");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "email already registered");
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
    }
}
