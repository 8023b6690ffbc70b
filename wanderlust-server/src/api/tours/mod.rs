//! Tour Catalog API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/tours", get(handler::list).post(handler::create))
        .route("/api/tours/{id}", get(handler::get_by_id).delete(handler::delete))
}
