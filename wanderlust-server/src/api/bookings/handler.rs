//! Booking Handlers
//!
//! The handler layer parses and validates wire input; the overlap
//! invariant itself lives in [`BookingRepository`].

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

use crate::core::ServerState;
use crate::db::models::{Booking, STATUS_CONFIRMED};
use crate::db::repository::BookingRepository;
use crate::utils::validation::{self, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN};
use crate::utils::{AppResult, time};

use shared::client::MessageResponse;
use shared::models::{Booking as SharedBooking, BookingCreate};

/// POST /api/bookings - 创建预订
///
/// `endDate` is derived as `startDate + duration` calendar days; a
/// malformed `startDate` is a 400, not an opaque 500.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<MessageResponse>> {
    validation::validate_required_text(&payload.user_id, "userId", MAX_SHORT_TEXT_LEN)?;
    validation::validate_required_text(&payload.tour_id, "tourId", MAX_SHORT_TEXT_LEN)?;
    validation::validate_required_text(&payload.tour_title, "tourTitle", MAX_NAME_LEN)?;
    validation::validate_optional_text(Some(payload.tour_image.as_str()), "tourImage", MAX_URL_LEN)?;

    let start_date = time::parse_date(&payload.start_date)?;
    let end_date = time::add_days(start_date, payload.duration)?;

    let repo = BookingRepository::new(state.get_db());
    let booking = repo
        .create(Booking {
            id: None,
            user_id: payload.user_id,
            tour_id: payload.tour_id,
            tour_title: payload.tour_title,
            tour_image: payload.tour_image,
            start_date,
            end_date,
            total_price: payload.price,
            status: STATUS_CONFIRMED.to_string(),
            created_at: Utc::now(),
        })
        .await?;

    tracing::info!(
        user_id = %booking.user_id,
        start_date = %booking.start_date,
        end_date = %booking.end_date,
        "Booking confirmed"
    );

    Ok(Json(MessageResponse::new("Booking confirmed!")))
}

/// GET /api/bookings/:userId - 用户预订列表 (按开始日期升序)
pub async fn list_for_user(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<SharedBooking>>> {
    let repo = BookingRepository::new(state.get_db());
    let bookings = repo.find_by_user(&user_id).await?;
    Ok(Json(bookings.into_iter().map(|b| b.into()).collect()))
}

/// DELETE /api/bookings/:id - 取消预订
///
/// Cancelling an unknown id still reports success: the caller cannot
/// distinguish "cancelled" from "already gone". The server log records the
/// difference.
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = BookingRepository::new(state.get_db());
    let removed = repo.delete(&id).await?;

    if removed {
        tracing::info!(booking_id = %id, "Booking cancelled");
    } else {
        tracing::warn!(booking_id = %id, "Cancel requested for missing booking");
    }

    Ok(Json(MessageResponse::new("Booking cancelled")))
}
