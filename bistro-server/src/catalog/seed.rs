//! 种子数据
//!
//! 默认使用编译期内置的 JSON (`bistro-server/data/*.json`)。
//! 设置 `CATALOG_DIR` 后改为从该目录读取同名文件。

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::utils::AppError;
use shared::models::{Category, Customer, Food, Restaurant};

const CATEGORIES_JSON: &str = include_str!("../../data/categories.json");
const RESTAURANTS_JSON: &str = include_str!("../../data/restaurants.json");
const FOODS_JSON: &str = include_str!("../../data/foods.json");
const CUSTOMERS_JSON: &str = include_str!("../../data/customers.json");

/// All catalog records loaded at startup
#[derive(Debug, Clone)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub restaurants: Vec<Restaurant>,
    pub foods: Vec<Food>,
    pub customers: Vec<Customer>,
}

impl SeedData {
    /// Built-in fixture records
    pub fn embedded() -> Result<Self, AppError> {
        Ok(Self {
            categories: parse("categories.json", CATEGORIES_JSON)?,
            restaurants: parse("restaurants.json", RESTAURANTS_JSON)?,
            foods: parse("foods.json", FOODS_JSON)?,
            customers: parse("customers.json", CUSTOMERS_JSON)?,
        })
    }

    /// Load the four fixture files from a directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref();
        Ok(Self {
            categories: read(dir, "categories.json")?,
            restaurants: read(dir, "restaurants.json")?,
            foods: read(dir, "foods.json")?,
            customers: read(dir, "customers.json")?,
        })
    }

    /// Pick the source according to configuration
    pub fn load(catalog_dir: Option<&str>) -> Result<Self, AppError> {
        match catalog_dir {
            Some(dir) => {
                tracing::info!(dir = %dir, "Loading catalog from directory");
                Self::from_dir(dir)
            }
            None => Self::embedded(),
        }
    }
}

fn read<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, AppError> {
    let path = dir.join(file);
    let raw = std::fs::read_to_string(&path).map_err(|e| {
        AppError::storage(format!("Failed to read {}: {}", path.display(), e))
            .with_detail("path", path.display().to_string())
    })?;
    parse(file, &raw)
}

fn parse<T: DeserializeOwned>(file: &str, raw: &str) -> Result<Vec<T>, AppError> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::config(format!("Invalid catalog file {file}: {e}")))
}
