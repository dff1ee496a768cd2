//! 成功响应结构

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;

/// `201 Created` 响应
///
/// ```json
/// { "status": "success", "message": "Food created successfully", "data": { ... } }
/// ```
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T> {
    status: &'static str,
    message: String,
    data: T,
}

impl<T> CreatedResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for CreatedResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}
