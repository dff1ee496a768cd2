//! 405 响应改写
//!
//! axum 对未注册的方法返回空 body 的 405 (带 `Allow` 头)。
//! 这里换成统一的错误 JSON，并保留 `Allow` 头。

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::{StatusCode, header};

use crate::utils::AppError;

pub async fn method_not_allowed_json(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let response = next.run(req).await;

    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rewritten = AppError::method_not_allowed(method.as_str()).into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(header::ALLOW, allow);
    }
    rewritten
}
