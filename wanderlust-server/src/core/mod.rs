//! 核心模块 - 服务器配置、状态和启动
//!
//! # 模块结构
//!
//! - [`Config`] - 服务器配置
//! - [`ServerState`] - 服务器状态 (依赖注入容器)
//! - [`Server`] - HTTP 服务器

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Server, build_app};
pub use state::ServerState;
