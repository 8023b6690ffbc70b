//! Booking Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Booking ID type
pub type BookingId = RecordId;

/// Initial (and only) booking status; bookings are write-once
pub const STATUS_CONFIRMED: &str = "Confirmed";

/// Booking record as stored (camelCase field names on disk)
///
/// `userId`/`tourId` are opaque reference strings; they are not enforced
/// against the `user`/`tour` tables. `startDate`/`endDate` are an inclusive
/// calendar range; `endDate` is always derived as `startDate + duration`
/// when the booking is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookingId>,
    pub user_id: String,
    pub tour_id: String,
    pub tour_title: String,
    #[serde(default)]
    pub tour_image: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
