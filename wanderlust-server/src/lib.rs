//! Wanderlust Server - 旅游预订演示平台后端
//!
//! # 架构概述
//!
//! 本模块是 Wanderlust Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (模型 + 仓库)
//! - **预订冲突检查** (`db::repository::booking`): 日期范围重叠校验
//! - **认证** (`api::auth`): Argon2 密码哈希注册/登录
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! wanderlust-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (模型、仓库)
//! └── utils/         # 错误、日志、日期、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_app};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置进程环境 (dotenv + 日志)
///
/// 必须在读取 [`Config`] 之前调用，保证 `.env` 已加载。
pub fn setup_environment() -> Result<(), AppError> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 _       __                 __          __           __
| |     / /___ _____  ____/ /__  _____/ /_  _______/ /_
| | /| / / __ `/ __ \/ __  / _ \/ ___/ / / / / ___/ __/
| |/ |/ / /_/ / / / / /_/ /  __/ /  / / /_/ (__  ) /_
|__/|__/\__,_/_/ /_/\__,_/\___/_/  /_/\__,_/____/\__/
    "#
    );
}
