//! Tour Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Tour ID type
pub type TourId = RecordId;

/// Tour catalog record as stored (camelCase field names on disk)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TourId>,
    pub title: String,
    #[serde(default)]
    pub short_desc: String,
    #[serde(default)]
    pub full_desc: String,
    pub price: f64,
    pub duration: u32,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub image: String,
    pub location: String,
}
