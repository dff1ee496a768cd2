//! Customer API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::api::{ApiJson, ApiQuery, AppResult, CreatedResponse};
use crate::catalog::{CustomerFilter, CustomerQuery, CustomerSortKey, CustomerStats};
use crate::core::ServerState;
use crate::query::QueryOptions;
use shared::models::{CUSTOMER_TAGS, Customer, CustomerCreate, CustomerStatus};

/// `GET /customers` 响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListResponse {
    pub status: &'static str,
    pub total: usize,
    pub page: u32,
    pub limit: usize,
    pub total_pages: usize,
    pub data: Vec<Customer>,
    pub stats: CustomerStats,
    pub statuses: &'static [CustomerStatus],
    pub tags: &'static [&'static str],
}

/// GET /customers - 查询顾客
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<CustomerQuery>,
) -> AppResult<Json<CustomerListResponse>> {
    let options: QueryOptions<CustomerFilter, CustomerSortKey> = query.try_into()?;
    let page = state.customers.list(&options);

    Ok(Json(CustomerListResponse {
        status: "success",
        total: page.total,
        page: page.page,
        limit: page.limit,
        total_pages: page.total_pages,
        data: page.data,
        stats: page.stats,
        statuses: &CustomerStatus::ALL,
        tags: CUSTOMER_TAGS,
    }))
}

/// POST /customers - 创建顾客
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<CustomerCreate>,
) -> AppResult<CreatedResponse<Customer>> {
    let customer = state.customers.create(payload)?;
    Ok(CreatedResponse::new("Customer created successfully", customer))
}
