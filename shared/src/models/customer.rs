//! Customer Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::util::parse_currency;

/// Tags a customer can carry, returned with every list response
pub const CUSTOMER_TAGS: &[&str] = &[
    "VIP",
    "Regular",
    "New Customer",
    "Vegetarian",
    "Family",
    "Corporate",
];

/// Tag marking high-value customers
pub const VIP_TAG: &str = "VIP";

/// Customer entity (顾客)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// `cust-NNN`
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub avatar: String,
    pub status: CustomerStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub order_count: u32,
    /// Currency string, e.g. `"$1,245.50"`
    pub total_spent: String,
    /// ISO-8601 date, absent for customers who never ordered
    #[serde(default)]
    pub last_order_date: Option<String>,
    /// ISO-8601 date
    pub join_date: String,
    /// City shown in the customer list
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub preferences: CustomerPreferences,
    #[serde(default)]
    pub notes: String,
}

impl Customer {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `total_spent` parsed to a number; `None` when the string is malformed
    pub fn total_spent_amount(&self) -> Option<Decimal> {
        parse_currency(&self.total_spent)
    }

    /// Case-insensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn is_vip(&self) -> bool {
        self.has_tag(VIP_TAG)
    }
}

/// Customer lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
    New,
}

impl CustomerStatus {
    /// All statuses, in display order
    pub const ALL: [CustomerStatus; 3] = [Self::Active, Self::Inactive, Self::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::New => "new",
        }
    }
}

impl std::fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Ordering preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerPreferences {
    pub favorite_categories: Vec<String>,
    pub dietary_restrictions: Vec<String>,
}

/// Create customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerCreate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub status: Option<CustomerStatus>,
    pub tags: Option<Vec<String>>,
    pub location: Option<String>,
    pub address: Option<Address>,
    pub preferences: Option<CustomerPreferences>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> Customer {
        serde_json::from_value(serde_json::json!({
            "id": "cust-001",
            "firstName": "Ana",
            "lastName": "García",
            "email": "ana@example.com",
            "phone": "555-0101",
            "status": "active",
            "tags": ["vip", "Regular"],
            "orderCount": 12,
            "totalSpent": "$1,245.50",
            "joinDate": "2023-01-15"
        }))
        .unwrap()
    }

    #[test]
    fn test_customer_defaults_and_helpers() {
        let customer = sample();
        assert_eq!(customer.full_name(), "Ana García");
        assert!(customer.is_vip());
        assert!(customer.last_order_date.is_none());
        assert_eq!(customer.address, Address::default());
        assert_eq!(
            customer.total_spent_amount(),
            Some(Decimal::from_str("1245.50").unwrap())
        );
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&CustomerStatus::New).unwrap();
        assert_eq!(json, "\"new\"");
        assert_eq!(CustomerStatus::Inactive.to_string(), "inactive");
    }
}
