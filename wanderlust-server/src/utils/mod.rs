//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResult`] - handler 层 Result 别名
//! - 日志、日期、输入校验等工具

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
