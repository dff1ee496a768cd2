//! HTTP 中间件
//!
//! - [`logging_middleware`] - 请求日志
//! - [`simulated_latency`] - 模拟网络延迟 (MOCK_LATENCY_MS)
//! - [`method_not_allowed_json`] - 405 响应改写为统一错误体
//! - [`handle_panic`] - 处理器 panic 转换为 500

mod latency;
mod logging;
mod method;
mod panic;

pub use latency::simulated_latency;
pub use logging::logging_middleware;
pub use method::method_not_allowed_json;
pub use panic::handle_panic;
