//! 只读目录 (mock 数据源)
//!
//! # 模块结构
//!
//! - [`foods`] - 菜品目录：过滤、排序、创建
//! - [`customers`] - 顾客目录：过滤、排序、统计、创建
//! - [`seed`] - 种子数据加载 (内置 JSON 或外部目录)
//!
//! 目录在启动时加载一次，之后只读。创建操作返回新记录但不写回目录，
//! 下一次列表查询看不到它。

pub mod customers;
pub mod foods;
pub mod seed;

pub use customers::{CustomerCatalog, CustomerFilter, CustomerQuery, CustomerSortKey, CustomerStats};
pub use foods::{FoodCatalog, FoodFilter, FoodQuery, FoodSortKey};
pub use seed::SeedData;

/// Next sequential id: `<prefix>-NNN`
///
/// Derived from the numeric suffix of the last record. An empty catalog or a
/// suffix that isn't a number restarts at 1.
pub fn next_id(prefix: &str, last_id: Option<&str>) -> String {
    let next = last_id
        .and_then(|id| id.rsplit('-').next())
        .and_then(|n| n.parse::<u32>().ok())
        .map_or(1, |n| n.saturating_add(1));
    format!("{prefix}-{next:03}")
}

/// Take a required text field, recording its name when absent or blank
pub(crate) fn required_text(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

/// Split a comma separated query value into trimmed, non-empty parts
pub(crate) fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Empty query values behave as if the parameter was not sent
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
