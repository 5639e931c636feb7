use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::api::common::{ApiJson, ErrorResponse, MessageResponse, INVALID_EMAIL_MESSAGE};
use crate::crypto::{generate_salt, generate_token, hash_password, verify_password};
use crate::db::UserConflict;
use crate::validation::{is_valid_email, is_valid_password, required, MIN_PASSWORD_LEN};
use crate::{AppError, AppState};

// Request/Response types
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
  username: Option<String>,
  email: Option<String>,
  password: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
  username: Option<String>,
  password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
  success: bool,
  message: String,
  /// Random 64-hex-character token. Not persisted and not checked by any endpoint.
  token: String,
  username: String,
  id: String,
}

// Auth handlers
#[utoipa::path(
  post,
  path = "/api/register",
  tag = "Auth",
  request_body = RegisterRequest,
  responses(
    (status = 200, description = "User registered", body = MessageResponse),
    (status = 400, description = "Missing fields, invalid input, or username/email taken", body = ErrorResponse)
  )
)]
pub async fn register(
  State(state): State<Arc<AppState>>,
  ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
  let (Some(username), Some(email), Some(password)) = (
    required(body.username),
    required(body.email),
    required(body.password),
  ) else {
    return Err(AppError::validation(
      "username, email and password are required",
    ));
  };

  if !is_valid_email(&email) {
    return Err(AppError::validation(INVALID_EMAIL_MESSAGE));
  }

  if !is_valid_password(&password) {
    return Err(AppError::validation(format!(
      "password must be at least {} characters",
      MIN_PASSWORD_LEN
    )));
  }

  let salt = generate_salt();
  let password_hash = hash_password(&password, &salt);

  let user = state
    .db
    .update(|doc| {
      match doc.find_user_conflict(&username, &email) {
        Some(UserConflict::Username) => Err(AppError::conflict("username already taken")),
        Some(UserConflict::Email) => Err(AppError::conflict("email already in use")),
        None => Ok(doc.add_user(&username, &email, &password_hash, &salt)),
      }
    })
    .await?;

  tracing::info!(user_id = %user.id, username = %user.username, "User registered");

  Ok(Json(MessageResponse::ok(
    "registration completed successfully",
  )))
}

#[utoipa::path(
  post,
  path = "/api/login",
  tag = "Auth",
  request_body = LoginRequest,
  responses(
    (status = 200, description = "Credentials accepted", body = LoginResponse),
    (status = 400, description = "Missing fields or invalid credentials", body = ErrorResponse)
  )
)]
pub async fn login(
  State(state): State<Arc<AppState>>,
  ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
  let (Some(username), Some(password)) = (required(body.username), required(body.password)) else {
    return Err(AppError::validation("username and password are required"));
  };

  let doc = state.db.read().await?;

  // Unknown user and wrong password must look the same to the client
  let user = doc
    .find_user_by_username(&username)
    .filter(|user| verify_password(&password, &user.salt, &user.password));

  let Some(user) = user else {
    tracing::warn!(username = %username, "Login rejected");
    return Err(AppError::InvalidCredentials);
  };

  tracing::info!(user_id = %user.id, username = %user.username, "Login succeeded");

  Ok(Json(LoginResponse {
    success: true,
    message: "login successful".to_string(),
    token: generate_token(),
    username: user.username.clone(),
    id: user.id.clone(),
  }))
}
