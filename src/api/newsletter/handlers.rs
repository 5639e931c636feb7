use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::api::common::{ApiJson, ErrorResponse, MessageResponse, INVALID_EMAIL_MESSAGE};
use crate::validation::{is_valid_email, required};
use crate::{AppError, AppState};

#[derive(Deserialize, ToSchema)]
pub struct SubscribeRequest {
    email: Option<String>,
}

/// Subscribe an email address to the newsletter
#[utoipa::path(
    post,
    path = "/api/subscribe",
    tag = "Newsletter",
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Subscription created", body = MessageResponse),
        (status = 400, description = "Missing or invalid email, or already subscribed", body = ErrorResponse)
    )
)]
pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<SubscribeRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let email =
        required(body.email).ok_or_else(|| AppError::validation("email address is required"))?;

    if !is_valid_email(&email) {
        return Err(AppError::validation(INVALID_EMAIL_MESSAGE));
    }

    let subscriber = state
        .db
        .update(|doc| {
            if doc.has_subscriber(&email) {
                return Err(AppError::conflict("email already registered"));
            }
            Ok(doc.add_subscriber(&email))
        })
        .await?;

    tracing::info!(subscriber_id = %subscriber.id, "Newsletter subscriber added");

    Ok(Json(MessageResponse::ok("subscription created successfully")))
}
