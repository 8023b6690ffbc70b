//! Seed API 模块
//!
//! 目录种子数据重置，仅用于演示/重置，不是生产数据管理手段。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/seed", get(handler::seed))
}
