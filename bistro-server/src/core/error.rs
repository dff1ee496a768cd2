//! 服务器启动/运行错误
//!
//! 请求级错误统一使用 [`AppError`](crate::utils::AppError)，
//! 这里只覆盖进程级失败 (加载数据、绑定端口、服务退出)。

use std::net::SocketAddr;
use thiserror::Error;

use crate::utils::AppError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("目录数据加载失败: {0}")]
    Catalog(#[from] AppError),

    #[error("无法绑定 {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务异常退出: {0}")]
    Serve(#[from] std::io::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
