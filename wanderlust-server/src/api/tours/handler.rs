//! Tour Catalog Handlers
//!
//! Plain CRUD, no business rule.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::Tour;
use crate::db::repository::TourRepository;
use crate::utils::validation::{self, MAX_DESC_LEN, MAX_NAME_LEN, MAX_URL_LEN};
use crate::utils::{AppError, AppResult};

use shared::client::MessageResponse;
use shared::models::{Tour as SharedTour, TourCreate};

/// GET /api/tours - 获取全部行程
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedTour>>> {
    let repo = TourRepository::new(state.get_db());
    let tours = repo.find_all().await?;
    Ok(Json(tours.into_iter().map(|t| t.into()).collect()))
}

/// GET /api/tours/:id - 获取单个行程
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedTour>> {
    let repo = TourRepository::new(state.get_db());
    let tour = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Tour not found"))?;
    Ok(Json(tour.into()))
}

/// POST /api/tours - 新增行程
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TourCreate>,
) -> AppResult<Json<SharedTour>> {
    validation::validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validation::validate_required_text(&payload.location, "location", MAX_NAME_LEN)?;
    validation::validate_optional_text(Some(payload.short_desc.as_str()), "shortDesc", MAX_DESC_LEN)?;
    validation::validate_optional_text(Some(payload.full_desc.as_str()), "fullDesc", MAX_DESC_LEN)?;
    validation::validate_optional_text(Some(payload.image.as_str()), "image", MAX_URL_LEN)?;

    let repo = TourRepository::new(state.get_db());
    let tour = repo
        .create(Tour {
            id: None,
            title: payload.title,
            short_desc: payload.short_desc,
            full_desc: payload.full_desc,
            price: payload.price,
            duration: payload.duration,
            priority: payload.priority,
            image: payload.image,
            location: payload.location,
        })
        .await?;

    tracing::info!(title = %tour.title, "Tour created");
    Ok(Json(tour.into()))
}

/// DELETE /api/tours/:id - 删除行程
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = TourRepository::new(state.get_db());
    let removed = repo.delete(&id).await?;
    if !removed {
        // Kept non-fatal: the route reports success either way
        tracing::warn!(tour_id = %id, "Delete requested for missing tour");
    }
    Ok(Json(MessageResponse::new("Deleted")))
}
