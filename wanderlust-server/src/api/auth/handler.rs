//! Authentication Handlers
//!
//! Registration and login. Every account, the provisioned admin included,
//! stores an argon2 hash and is verified through the same code path; there
//! is no hardcoded credential bypass.

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::validation::{self, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppResult};
use crate::db::models::User;

use shared::client::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/register - 注册新用户
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    validation::validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    validation::validate_email(&req.email)?;
    validation::validate_required_text(&req.password, "password", MAX_PASSWORD_LEN)?;
    validation::validate_optional_text(req.hometown.as_deref(), "hometown", MAX_NAME_LEN)?;
    validation::validate_optional_text(req.dob.as_deref(), "dob", MAX_SHORT_TEXT_LEN)?;

    let password = User::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let repo = UserRepository::new(state.get_db());
    let user = repo
        .create(User {
            id: None,
            name: req.name,
            email: req.email,
            password,
            role: "user".to_string(),
            hometown: req.hometown,
            dob: req.dob,
        })
        .await?;

    tracing::info!(email = %user.email, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered")),
    ))
}

/// POST /api/login - 登录
///
/// Returns the user record; no session token is issued.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error for unknown email and wrong password, so login
    // responses cannot be used to enumerate accounts
    let user = match user {
        Some(u) => u,
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let password_valid = user
        .verify_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

    if !password_valid {
        tracing::warn!(email = %req.email, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    tracing::info!(user_id = %user_id, email = %user.email, "User logged in");

    Ok(Json(LoginResponse {
        id: user_id,
        name: user.name,
        email: user.email,
        role: user.role,
    }))
}
