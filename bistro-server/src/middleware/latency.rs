//! 模拟延迟中间件
//!
//! 前端开发时用来复现加载状态，延迟在处理器执行前施加。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Duration;

use crate::core::ServerState;

pub async fn simulated_latency(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    let delay = state.config.mock_latency_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
    next.run(req).await
}
