//! Customer API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /customers, /api/customers | GET | 列表 + 统计 |
//! | /customers, /api/customers | POST | 创建 (邮箱唯一, 不持久化) |
//! | /customers, /api/customers | OPTIONS | 200 |

mod handler;

pub use handler::CustomerListResponse;

use axum::{
    Router,
    routing::{MethodRouter, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/customers", routes())
        .route("/api/customers", routes())
}

fn routes() -> MethodRouter<ServerState> {
    get(handler::list)
        .post(handler::create)
        .options(super::preflight)
}
