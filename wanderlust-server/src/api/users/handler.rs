//! User Profile Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::validation::{self, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppResult};

use shared::client::ProfileUpdate;
use shared::models::User as SharedUser;

/// GET /api/users/:id - 获取用户资料 (不含密码哈希)
pub async fn get_profile(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedUser>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(user.into()))
}

/// PUT /api/users/:id - 更新用户资料
///
/// Only name, hometown and dob are editable; email, role and the stored
/// password hash cannot be changed through this route.
pub async fn update_profile(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProfileUpdate>,
) -> AppResult<Json<SharedUser>> {
    if let Some(ref name) = payload.name {
        validation::validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validation::validate_optional_text(payload.hometown.as_deref(), "hometown", MAX_NAME_LEN)?;
    validation::validate_optional_text(payload.dob.as_deref(), "dob", MAX_SHORT_TEXT_LEN)?;

    let repo = UserRepository::new(state.get_db());
    let user = repo.update_profile(&id, payload).await?;

    tracing::info!(user_id = %id, "Profile updated");
    Ok(Json(user.into()))
}
