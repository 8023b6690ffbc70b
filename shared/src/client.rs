//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub hometown: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
///
/// No session token is issued; the client keeps the returned user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

// =============================================================================
// Profile API DTOs
// =============================================================================

/// Profile update payload; only these three fields are editable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub hometown: Option<String>,
    pub dob: Option<String>,
}

// =============================================================================
// Generic responses
// =============================================================================

/// Plain `{message}` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
