//! Bistro Server - 餐厅仪表盘 mock 后端
//!
//! # 架构概述
//!
//! 为仪表盘前端提供只读目录查询接口：
//!
//! - **查询引擎** (`query`): 过滤 → 搜索 → 统计 → 稳定排序 → 分页
//! - **目录** (`catalog`): 菜品 / 顾客种子数据及各自的过滤、排序、统计、创建规则
//! - **HTTP API** (`api`): `/foods`、`/customers`、`/health`
//! - **中间件** (`middleware`): 请求日志、模拟延迟、405 改写、panic 兜底
//!
//! # 模块结构
//!
//! ```text
//! bistro-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── query/         # 通用列表查询引擎
//! ├── catalog/       # 目录数据和资源规则
//! ├── api/           # HTTP 处理器
//! ├── routes/        # 路由组装 + oneshot 扩展
//! ├── middleware/    # HTTP 中间件
//! └── utils/         # 日志、校验、错误类型
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod middleware;
pub mod query;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use routes::{OneshotRouter, build_app, build_router};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 .env，初始化日志，返回配置
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____  _      __
   / __ )(_)____/ /__________
  / __  / / ___/ __/ ___/ __ \
 / /_/ / (__  ) /_/ /  / /_/ /
/_____/_/____/\__/_/   \____/
    "#
    );
}
