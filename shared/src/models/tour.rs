//! Tour Model

use serde::{Deserialize, Serialize};

/// Tour catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub short_desc: String,
    #[serde(default)]
    pub full_desc: String,
    pub price: f64,
    /// Trip length in days
    pub duration: u32,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub image: String,
    pub location: String,
}

/// Create tour payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourCreate {
    pub title: String,
    #[serde(default)]
    pub short_desc: String,
    #[serde(default)]
    pub full_desc: String,
    pub price: f64,
    pub duration: u32,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub image: String,
    pub location: String,
}

fn default_priority() -> String {
    "Standard".to_string()
}
