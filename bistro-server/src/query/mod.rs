//! 列表查询引擎
//!
//! 所有列表接口共用同一条流水线：
//!
//! ```text
//! records ─▶ filter ─▶ text search ─▶ stats ─▶ stable sort ─▶ paginate
//! ```
//!
//! 统计 (`stats`) 基于过滤 + 搜索之后、分页之前的完整结果集计算，
//! 因此翻页不会改变统计值。排序是稳定的，比较相等的记录保持原始顺序。
//!
//! 每种资源通过实现 [`Queryable`] 接入：声明自己的过滤条件、排序键和统计结构。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Apply the direction to an ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// A record type the engine can list
pub trait Queryable: Clone {
    /// Structured filter (all set conditions must match)
    type Filter;
    /// Sort key selector
    type SortKey: Copy;
    /// Aggregate computed over the filtered set
    type Stats: Serialize;

    fn matches_filter(&self, filter: &Self::Filter) -> bool;

    /// `needle` is already trimmed and lowercased
    fn matches_text(&self, needle: &str) -> bool;

    /// Ascending comparison for the given key
    fn compare(&self, other: &Self, key: Self::SortKey) -> Ordering;

    fn stats(records: &[&Self]) -> Self::Stats;
}

/// 查询参数 (已从请求中解析)
#[derive(Debug, Clone)]
pub struct QueryOptions<F, K> {
    pub filter: F,
    /// Free text search, case-insensitive substring match
    pub query: Option<String>,
    pub sort_by: Option<K>,
    pub sort_order: SortOrder,
    /// 1-based; `None` or 0 means the first page
    pub page: Option<u32>,
    /// `None` or 0 means "everything on one page"
    pub limit: Option<u32>,
}

impl<F: Default, K> Default for QueryOptions<F, K> {
    fn default() -> Self {
        Self {
            filter: F::default(),
            query: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
            page: None,
            limit: None,
        }
    }
}

/// 一页查询结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage<T, S> {
    pub data: Vec<T>,
    /// Size of the filtered set (before pagination)
    pub total: usize,
    pub page: u32,
    pub limit: usize,
    pub total_pages: usize,
    pub stats: S,
}

/// Run the listing pipeline over `records`
///
/// Never fails: an out-of-range page simply yields an empty `data`.
pub fn execute<T: Queryable>(
    records: &[T],
    options: &QueryOptions<T::Filter, T::SortKey>,
) -> QueryPage<T, T::Stats> {
    let needle = options
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<&T> = records
        .iter()
        .filter(|r| r.matches_filter(&options.filter))
        .filter(|r| needle.as_deref().is_none_or(|n| r.matches_text(n)))
        .collect();

    let stats = T::stats(&matched);

    if let Some(key) = options.sort_by {
        let order = options.sort_order;
        // sort_by 是稳定排序
        matched.sort_by(|a, b| order.apply(a.compare(b, key)));
    }

    let total = matched.len();
    let limit = options
        .limit
        .filter(|l| *l > 0)
        .map_or(total, |l| l as usize);
    let page = options.page.unwrap_or(1).max(1);
    let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
    let start = (page as usize - 1).saturating_mul(limit);

    let data = matched
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    QueryPage {
        data,
        total,
        page,
        limit,
        total_pages,
        stats,
    }
}

/// Case-insensitive substring check, `needle` must already be lowercase
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive ordering for display strings
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
