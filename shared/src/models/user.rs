//! User Model

use serde::{Deserialize, Serialize};

/// Public user profile as exposed by the API
///
/// The stored password hash is deliberately absent from this type, so a
/// profile response can never leak it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
}

fn default_role() -> String {
    "user".to_string()
}
