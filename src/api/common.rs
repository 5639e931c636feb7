use axum::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

use crate::AppError;

pub const INVALID_EMAIL_MESSAGE: &str = "invalid email format";

// JSON body extractor - parses the raw body whatever the Content-Type says,
// and reports failures as AppError so they get the uniform error envelope
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(AppError::MalformedBody)?;

        // Derived struct visitors would also take a positional array
        if !value.is_object() {
            return Err(AppError::MalformedBody(serde::de::Error::custom(
                "request body must be a JSON object",
            )));
        }

        let body = serde_json::from_value(value).map_err(AppError::MalformedBody)?;
        Ok(ApiJson(body))
    }
}

/// Plain success response
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    /// Always `true`
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Standard error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Catch-all for requests no route or static file answers
pub async fn not_found() -> AppError {
    AppError::NotFound
}
