use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::api::common::{ApiJson, ErrorResponse, MessageResponse, INVALID_EMAIL_MESSAGE};
use crate::validation::{is_valid_email, required};
use crate::{AppError, AppState};

#[derive(Deserialize, ToSchema)]
pub struct ContactRequest {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

/// Store a message from the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored", body = MessageResponse),
        (status = 400, description = "Missing fields or invalid email", body = ErrorResponse)
    )
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<ContactRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (Some(name), Some(email), Some(message)) = (
        required(body.name),
        required(body.email),
        required(body.message),
    ) else {
        return Err(AppError::validation("name, email and message are required"));
    };

    if !is_valid_email(&email) {
        return Err(AppError::validation(INVALID_EMAIL_MESSAGE));
    }

    let stored = state
        .db
        .update(|doc| Ok::<_, AppError>(doc.add_message(&name, &email, &message)))
        .await?;

    tracing::info!(message_id = %stored.id, "Contact message stored");

    Ok(Json(MessageResponse::ok("message sent successfully")))
}
