//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 注册/登录接口
//! - [`users`] - 用户资料接口
//! - [`tours`] - 行程目录管理接口
//! - [`bookings`] - 预订接口 (日期冲突检查)
//! - [`seed`] - 目录种子数据重置接口

pub mod convert;

pub mod auth;
pub mod health;

// Data models API
pub mod bookings;
pub mod seed;
pub mod tours;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
