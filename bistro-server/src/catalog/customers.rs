//! 顾客目录
//!
//! 金额字段 `totalSpent` 以货币字符串存储 (如 `"$1,245.50"`)，
//! 过滤、排序和统计一律先解析为数值再比较，避免字典序错误。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{next_id, non_empty, required_text, split_list};
use crate::query::{self, QueryOptions, QueryPage, Queryable, SortOrder, cmp_ci, contains_ci};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Customer, CustomerCreate, CustomerStatus};
use shared::util::{format_currency, parse_iso_datetime, today_iso};

const ID_PREFIX: &str = "cust";
const DEFAULT_AVATAR: &str = "/images/avatars/default.png";
const DEFAULT_TAG: &str = "New Customer";

/// Structured customer filter, every set field must match
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub status: Option<CustomerStatus>,
    pub min_order_count: Option<u32>,
    pub min_spent: Option<Decimal>,
    /// Case-insensitive substring of `location`
    pub location: Option<String>,
    /// Match-any, case-insensitive
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerSortKey {
    /// Last name, then first name
    Name,
    FirstName,
    LastName,
    Email,
    OrderCount,
    TotalSpent,
    LastOrderDate,
    JoinDate,
    Status,
}

/// `GET /customers` query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerQuery {
    /// `active` | `inactive` | `new`, `all` or empty disables the filter
    pub status: Option<String>,
    pub min_order_count: Option<u32>,
    pub min_spent: Option<Decimal>,
    pub location: Option<String>,
    /// Comma separated
    pub tags: Option<String>,
    pub query: Option<String>,
    pub sort_by: Option<CustomerSortKey>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TryFrom<CustomerQuery> for QueryOptions<CustomerFilter, CustomerSortKey> {
    type Error = AppError;

    fn try_from(q: CustomerQuery) -> Result<Self, Self::Error> {
        let status = match non_empty(q.status) {
            None => None,
            Some(s) if s.eq_ignore_ascii_case("all") => None,
            Some(s) => Some(parse_status(&s)?),
        };

        Ok(Self {
            filter: CustomerFilter {
                status,
                min_order_count: q.min_order_count,
                min_spent: q.min_spent,
                location: non_empty(q.location).map(|l| l.to_lowercase()),
                tags: split_list(q.tags.as_deref()),
            },
            query: q.query,
            sort_by: q.sort_by,
            sort_order: q.sort_order.unwrap_or_default(),
            page: q.page,
            limit: q.limit,
        })
    }
}

fn parse_status(value: &str) -> AppResult<CustomerStatus> {
    CustomerStatus::ALL
        .into_iter()
        .find(|s| s.as_str().eq_ignore_ascii_case(value))
        .ok_or_else(|| {
            AppError::validation(format!("Unknown status: {value}")).with_detail("status", value)
        })
}

/// 顾客统计 (基于过滤后的完整结果集)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub new: usize,
    pub vip: usize,
    pub total_revenue: Decimal,
    /// Revenue per customer, 2 decimal places
    pub average_spent: Decimal,
    /// Orders per customer, 1 decimal place
    pub average_order_count: f64,
}

impl Queryable for Customer {
    type Filter = CustomerFilter;
    type SortKey = CustomerSortKey;
    type Stats = CustomerStats;

    fn matches_filter(&self, filter: &CustomerFilter) -> bool {
        filter.status.is_none_or(|s| self.status == s)
            && filter
                .min_order_count
                .is_none_or(|min| self.order_count >= min)
            && filter
                .min_spent
                .is_none_or(|min| self.total_spent_amount().is_some_and(|spent| spent >= min))
            && filter
                .location
                .as_deref()
                .is_none_or(|loc| contains_ci(&self.location, loc))
            && (filter.tags.is_empty() || filter.tags.iter().any(|t| self.has_tag(t)))
    }

    fn matches_text(&self, needle: &str) -> bool {
        contains_ci(&self.first_name, needle)
            || contains_ci(&self.last_name, needle)
            || contains_ci(&self.full_name(), needle)
            || contains_ci(&self.email, needle)
            || contains_ci(&self.phone, needle)
            || contains_ci(&self.location, needle)
    }

    fn compare(&self, other: &Self, key: CustomerSortKey) -> Ordering {
        match key {
            CustomerSortKey::Name => cmp_ci(&self.last_name, &other.last_name)
                .then_with(|| cmp_ci(&self.first_name, &other.first_name)),
            CustomerSortKey::FirstName => cmp_ci(&self.first_name, &other.first_name),
            CustomerSortKey::LastName => cmp_ci(&self.last_name, &other.last_name),
            CustomerSortKey::Email => cmp_ci(&self.email, &other.email),
            CustomerSortKey::OrderCount => self.order_count.cmp(&other.order_count),
            // unparseable amounts (None) sort first
            CustomerSortKey::TotalSpent => {
                self.total_spent_amount().cmp(&other.total_spent_amount())
            }
            CustomerSortKey::LastOrderDate => {
                let a = self.last_order_date.as_deref().and_then(parse_iso_datetime);
                let b = other.last_order_date.as_deref().and_then(parse_iso_datetime);
                a.cmp(&b)
            }
            CustomerSortKey::JoinDate => {
                parse_iso_datetime(&self.join_date).cmp(&parse_iso_datetime(&other.join_date))
            }
            CustomerSortKey::Status => self.status.as_str().cmp(other.status.as_str()),
        }
    }

    fn stats(records: &[&Self]) -> CustomerStats {
        let mut stats = CustomerStats {
            total: records.len(),
            ..Default::default()
        };
        let mut orders: u64 = 0;

        for customer in records {
            match customer.status {
                CustomerStatus::Active => stats.active += 1,
                CustomerStatus::Inactive => stats.inactive += 1,
                CustomerStatus::New => stats.new += 1,
            }
            if customer.is_vip() {
                stats.vip += 1;
            }
            stats.total_revenue += customer.total_spent_amount().unwrap_or_default();
            orders += u64::from(customer.order_count);
        }

        if stats.total > 0 {
            let count = Decimal::from(stats.total as u64);
            stats.average_spent = (stats.total_revenue / count).round_dp(2);
            let avg = orders as f64 / stats.total as f64;
            stats.average_order_count = (avg * 10.0).round() / 10.0;
        }

        stats
    }
}

/// Customer catalog
#[derive(Debug, Clone, Default)]
pub struct CustomerCatalog {
    customers: Vec<Customer>,
}

impl CustomerCatalog {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn list(
        &self,
        options: &QueryOptions<CustomerFilter, CustomerSortKey>,
    ) -> QueryPage<Customer, CustomerStats> {
        query::execute(&self.customers, options)
    }

    pub fn email_exists(&self, email: &str) -> bool {
        self.customers
            .iter()
            .any(|c| c.email.eq_ignore_ascii_case(email))
    }

    /// Build a new customer record from a create payload
    ///
    /// Email uniqueness is checked case-insensitively against the catalog.
    /// The record is returned but not stored.
    pub fn create(&self, payload: CustomerCreate) -> AppResult<Customer> {
        let mut missing = Vec::new();
        let first_name = required_text(payload.first_name, "firstName", &mut missing);
        let last_name = required_text(payload.last_name, "lastName", &mut missing);
        let email = required_text(payload.email, "email", &mut missing);
        let phone = required_text(payload.phone, "phone", &mut missing);
        let (Some(first_name), Some(last_name), Some(email), Some(phone)) =
            (first_name, last_name, email, phone)
        else {
            return Err(AppError::missing_fields(&missing));
        };

        validate_required_text(&first_name, "firstName", MAX_NAME_LEN)?;
        validate_required_text(&last_name, "lastName", MAX_NAME_LEN)?;
        validate_required_text(&email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(&phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
        if !email.contains('@') {
            return Err(
                AppError::validation("Invalid email address").with_detail("email", email.as_str())
            );
        }

        if self.email_exists(&email) {
            return Err(AppError::new(ErrorCode::CustomerEmailExists).with_detail("email", email));
        }

        let address = payload.address.unwrap_or_default();
        let location = non_empty(payload.location).unwrap_or_else(|| address.city.clone());

        let customer = Customer {
            id: next_id(ID_PREFIX, self.customers.last().map(|c| c.id.as_str())),
            first_name,
            last_name,
            email,
            phone,
            avatar: non_empty(payload.avatar).unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            status: payload.status.unwrap_or(CustomerStatus::New),
            tags: payload
                .tags
                .unwrap_or_else(|| vec![DEFAULT_TAG.to_string()]),
            order_count: 0,
            total_spent: format_currency(Decimal::ZERO),
            last_order_date: None,
            join_date: today_iso(),
            location,
            address,
            preferences: payload.preferences.unwrap_or_default(),
            notes: payload.notes.unwrap_or_default(),
        };

        tracing::info!(id = %customer.id, email = %customer.email, "Customer created");
        Ok(customer)
    }
}
