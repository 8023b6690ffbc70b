//! Booking Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A confirmed trip booking
///
/// `startDate`/`endDate` are an inclusive calendar range. `tourTitle`,
/// `tourImage` and `totalPrice` are denormalized copies taken from the tour
/// at booking time and are not kept in sync with later catalog edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
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

/// Create booking payload
///
/// `endDate` is never supplied by the client; the server derives it as
/// `startDate + duration` calendar days.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub user_id: String,
    pub tour_id: String,
    /// YYYY-MM-DD
    pub start_date: String,
    /// Trip length in days
    pub duration: u32,
    pub price: f64,
    pub tour_title: String,
    #[serde(default)]
    pub tour_image: String,
}
