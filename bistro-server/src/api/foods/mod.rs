//! Food API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /foods, /api/foods | GET | 列表 (过滤、搜索、排序、分页) |
//! | /foods, /api/foods | POST | 创建 (不持久化) |
//! | /foods, /api/foods | OPTIONS | 200 |

mod handler;

pub use handler::FoodListResponse;

use axum::{
    Router,
    routing::{MethodRouter, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/foods", routes())
        .route("/api/foods", routes())
}

fn routes() -> MethodRouter<ServerState> {
    get(handler::list)
        .post(handler::create)
        .options(super::preflight)
}
