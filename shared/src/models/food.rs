//! Food Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Food entity (菜品)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// `food-NNN`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    /// Category reference (`cat-NNN`)
    pub category_id: String,
    /// Category display name (denormalized)
    pub category: String,
    /// Restaurant reference (`rest-NNN`)
    pub restaurant_id: String,
    /// Restaurant display name (denormalized)
    pub restaurant_name: String,
    /// Average rating, 0.0 - 5.0
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_spicy: bool,
    /// Preparation time in minutes
    #[serde(default)]
    pub preparation_time: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub nutritional_info: NutritionalInfo,
    /// ISO-8601 timestamp
    pub created_at: String,
}

impl Food {
    /// Case-insensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Nutritional information per serving
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInfo {
    pub calories: u32,
    /// grams
    pub protein: f64,
    /// grams
    pub carbs: f64,
    /// grams
    pub fat: f64,
}

/// Create food payload
///
/// Every field is optional on the wire so that missing required fields can be
/// reported together instead of failing on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub category_id: Option<String>,
    pub restaurant_id: Option<String>,
    pub is_popular: Option<bool>,
    pub is_vegetarian: Option<bool>,
    pub is_spicy: Option<bool>,
    pub preparation_time: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub allergens: Option<Vec<String>>,
    pub nutritional_info: Option<NutritionalInfo>,
}
