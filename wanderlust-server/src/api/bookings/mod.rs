//! Booking API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/bookings | POST | 创建预订 (日期冲突 → 409) |
//! | /api/bookings/{userId} | GET | 用户预订列表 (按开始日期升序) |
//! | /api/bookings/{id} | DELETE | 取消预订 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/bookings", post(handler::create))
        .route(
            "/api/bookings/{id}",
            get(handler::list_for_user).delete(handler::cancel),
        )
}
