//! User Profile API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/users/{id}",
        get(handler::get_profile).put(handler::update_profile),
    )
}
