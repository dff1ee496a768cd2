//! Food API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::api::{ApiJson, ApiQuery, AppResult, CreatedResponse};
use crate::catalog::FoodQuery;
use crate::core::ServerState;
use shared::models::{Category, Food, FoodCreate, Restaurant};

/// `GET /foods` 响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodListResponse {
    pub status: &'static str,
    pub total: usize,
    pub page: u32,
    pub limit: usize,
    pub total_pages: usize,
    pub data: Vec<Food>,
    pub categories: Vec<Category>,
    pub restaurants: Vec<Restaurant>,
}

/// GET /foods - 查询菜品
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<FoodQuery>,
) -> AppResult<Json<FoodListResponse>> {
    let page = state.foods.list(&query.into());

    Ok(Json(FoodListResponse {
        status: "success",
        total: page.total,
        page: page.page,
        limit: page.limit,
        total_pages: page.total_pages,
        data: page.data,
        categories: state.foods.categories().to_vec(),
        restaurants: state.foods.restaurants().to_vec(),
    }))
}

/// POST /foods - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<FoodCreate>,
) -> AppResult<CreatedResponse<Food>> {
    let food = state.foods.create(payload)?;
    Ok(CreatedResponse::new("Food created successfully", food))
}
