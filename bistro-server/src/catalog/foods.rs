//! 菜品目录

use rust_decimal::Decimal;
use serde::Deserialize;
use std::cmp::Ordering;

use super::{next_id, non_empty, required_text, split_list};
use crate::query::{self, QueryOptions, QueryPage, Queryable, SortOrder, cmp_ci, contains_ci};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Category, Food, FoodCreate, Restaurant};
use shared::util::{now_iso, parse_iso_datetime};

const ID_PREFIX: &str = "food";
const DEFAULT_IMAGE: &str = "/images/placeholder.jpg";
const DEFAULT_PREPARATION_MINUTES: u32 = 15;

/// Structured food filter, every set field must match
#[derive(Debug, Clone, Default)]
pub struct FoodFilter {
    pub category_id: Option<String>,
    pub restaurant_id: Option<String>,
    pub is_popular: Option<bool>,
    pub min_rating: Option<f64>,
    pub max_price: Option<Decimal>,
    /// Match-any, case-insensitive
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FoodSortKey {
    Name,
    Price,
    Rating,
    ReviewCount,
    PreparationTime,
    Calories,
    CreatedAt,
}

/// `GET /foods` query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodQuery {
    pub category_id: Option<String>,
    pub restaurant_id: Option<String>,
    pub is_popular: Option<bool>,
    pub min_rating: Option<f64>,
    pub max_price: Option<Decimal>,
    /// Comma separated
    pub tags: Option<String>,
    pub query: Option<String>,
    pub sort_by: Option<FoodSortKey>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<FoodQuery> for QueryOptions<FoodFilter, FoodSortKey> {
    fn from(q: FoodQuery) -> Self {
        let tags = split_list(q.tags.as_deref());
        Self {
            filter: FoodFilter {
                category_id: non_empty(q.category_id),
                restaurant_id: non_empty(q.restaurant_id),
                is_popular: q.is_popular,
                min_rating: q.min_rating,
                max_price: q.max_price,
                tags,
            },
            query: q.query,
            sort_by: q.sort_by,
            sort_order: q.sort_order.unwrap_or_default(),
            page: q.page,
            limit: q.limit,
        }
    }
}

impl Queryable for Food {
    type Filter = FoodFilter;
    type SortKey = FoodSortKey;
    type Stats = ();

    fn matches_filter(&self, filter: &FoodFilter) -> bool {
        filter
            .category_id
            .as_deref()
            .is_none_or(|id| self.category_id == id)
            && filter
                .restaurant_id
                .as_deref()
                .is_none_or(|id| self.restaurant_id == id)
            && filter.is_popular.is_none_or(|p| self.is_popular == p)
            && filter.min_rating.is_none_or(|min| self.rating >= min)
            && filter.max_price.is_none_or(|max| self.price <= max)
            && (filter.tags.is_empty() || filter.tags.iter().any(|t| self.has_tag(t)))
    }

    fn matches_text(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.description, needle)
            || contains_ci(&self.category, needle)
            || contains_ci(&self.restaurant_name, needle)
            || self.tags.iter().any(|t| contains_ci(t, needle))
    }

    fn compare(&self, other: &Self, key: FoodSortKey) -> Ordering {
        match key {
            FoodSortKey::Name => cmp_ci(&self.name, &other.name),
            FoodSortKey::Price => self.price.cmp(&other.price),
            FoodSortKey::Rating => self.rating.total_cmp(&other.rating),
            FoodSortKey::ReviewCount => self.review_count.cmp(&other.review_count),
            FoodSortKey::PreparationTime => self.preparation_time.cmp(&other.preparation_time),
            FoodSortKey::Calories => self
                .nutritional_info
                .calories
                .cmp(&other.nutritional_info.calories),
            FoodSortKey::CreatedAt => {
                parse_iso_datetime(&self.created_at).cmp(&parse_iso_datetime(&other.created_at))
            }
        }
    }

    fn stats(_records: &[&Self]) {}
}

/// Food catalog plus the lookup tables the list response carries
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<Food>,
    categories: Vec<Category>,
    restaurants: Vec<Restaurant>,
}

impl FoodCatalog {
    pub fn new(foods: Vec<Food>, categories: Vec<Category>, restaurants: Vec<Restaurant>) -> Self {
        Self {
            foods,
            categories,
            restaurants,
        }
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn list(&self, options: &QueryOptions<FoodFilter, FoodSortKey>) -> QueryPage<Food, ()> {
        query::execute(&self.foods, options)
    }

    /// Build a new food record from a create payload
    ///
    /// The record gets the next sequential id but is not added to the
    /// catalog.
    pub fn create(&self, payload: FoodCreate) -> AppResult<Food> {
        let mut missing = Vec::new();
        let name = required_text(payload.name, "name", &mut missing);
        if payload.price.is_none() {
            missing.push("price");
        }
        let category_id = required_text(payload.category_id, "categoryId", &mut missing);
        let (Some(name), Some(price), Some(category_id)) = (name, payload.price, category_id)
        else {
            return Err(AppError::missing_fields(&missing));
        };

        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;

        if price < Decimal::ZERO {
            return Err(AppError::with_message(
                shared::ErrorCode::FoodInvalidPrice,
                "price must not be negative",
            )
            .with_detail("price", price.to_string()));
        }

        let category = self
            .categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| {
                AppError::validation(format!("Unknown categoryId: {category_id}"))
                    .with_detail("categoryId", category_id.clone())
            })?;

        let restaurant = match non_empty(payload.restaurant_id) {
            Some(id) => self
                .restaurants
                .iter()
                .find(|r| r.id == id)
                .map(Some)
                .ok_or_else(|| {
                    AppError::validation(format!("Unknown restaurantId: {id}"))
                        .with_detail("restaurantId", id.clone())
                })?,
            None => self.restaurants.first(),
        };
        let (restaurant_id, restaurant_name) = restaurant
            .map(|r| (r.id.clone(), r.name.clone()))
            .unwrap_or_default();

        let food = Food {
            id: next_id(ID_PREFIX, self.foods.last().map(|f| f.id.as_str())),
            name,
            description: payload.description.unwrap_or_default(),
            price,
            image: non_empty(payload.image).unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            category_id,
            category: category.name.clone(),
            restaurant_id,
            restaurant_name,
            rating: 0.0,
            review_count: 0,
            is_popular: payload.is_popular.unwrap_or(false),
            is_vegetarian: payload.is_vegetarian.unwrap_or(false),
            is_spicy: payload.is_spicy.unwrap_or(false),
            preparation_time: payload
                .preparation_time
                .unwrap_or(DEFAULT_PREPARATION_MINUTES),
            tags: payload.tags.unwrap_or_default(),
            allergens: payload.allergens.unwrap_or_default(),
            nutritional_info: payload.nutritional_info.unwrap_or_default(),
            created_at: now_iso(),
        };

        tracing::info!(id = %food.id, name = %food.name, "Food created");
        Ok(food)
    }
}
