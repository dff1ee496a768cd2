//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`foods`] - 菜品目录接口
//! - [`customers`] - 顾客目录接口
//!
//! 每个资源同时挂载在 `/<resource>` 和 `/api/<resource>` 下。

pub mod extract;
pub mod response;

pub mod customers;
pub mod foods;
pub mod health;

use http::{StatusCode, Uri};

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
pub use extract::{ApiJson, ApiQuery};
pub use response::CreatedResponse;

/// OPTIONS - 无 CORS 预检头的 OPTIONS 请求直接返回 200
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// 未注册路由 - 统一错误 JSON 的 404
pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
