//! 购物车数据模型
//!
//! [`CartLineItem`] 是持久化到本地存储槽位的行项目格式，
//! [`CartItemInput`] 是"加入购物车"时由菜单传入的数据 (不含数量)。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Food;

/// 加入购物车的商品 (不含数量)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInput {
    /// Catalog item id, unique key within the cart
    pub id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub restaurant_id: String,
    #[serde(default)]
    pub restaurant_name: String,
}

impl From<&Food> for CartItemInput {
    fn from(food: &Food) -> Self {
        Self {
            id: food.id.clone(),
            name: food.name.clone(),
            price: food.price,
            image_url: food.image.clone(),
            restaurant_id: food.restaurant_id.clone(),
            restaurant_name: food.restaurant_name.clone(),
        }
    }
}

/// 购物车行项目
///
/// `quantity` 始终 >= 1，数量降到 0 的行会被移除而不是保存。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub restaurant_id: String,
    #[serde(default)]
    pub restaurant_name: String,
}

impl CartLineItem {
    pub fn new(input: CartItemInput, quantity: u32) -> Self {
        Self {
            id: input.id,
            name: input.name,
            price: input.price,
            quantity,
            image_url: input.image_url,
            restaurant_id: input.restaurant_id,
            restaurant_name: input.restaurant_name,
        }
    }

    /// price × quantity
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// 购物车只读快照 (供 UI 层渲染)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub items: Vec<CartLineItem>,
    /// Σ quantity
    pub count: u64,
    /// Σ price × quantity
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartLineItem::new(
            CartItemInput {
                id: "food-001".to_string(),
                name: "Margherita".to_string(),
                price: Decimal::new(1250, 2),
                image_url: String::new(),
                restaurant_id: "rest-001".to_string(),
                restaurant_name: "Trattoria".to_string(),
            },
            3,
        );
        assert_eq!(item.line_total(), Decimal::new(3750, 2));
    }

    #[test]
    fn test_line_item_wire_format() {
        let json = r#"{"id":"food-002","name":"Soup","price":6.5,"quantity":2,"imageUrl":"/soup.jpg"}"#;
        let item: CartLineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.image_url, "/soup.jpg");
        assert!(item.restaurant_id.is_empty());

        let out = serde_json::to_value(&item).unwrap();
        assert!(out.get("imageUrl").is_some());
        assert!(out.get("restaurantName").is_some());
        assert_eq!(out["price"].as_f64(), Some(6.5));
        assert_eq!(out["quantity"], 2);
    }

    #[test]
    fn test_money_serializes_as_number() {
        let summary = CartSummary {
            items: Vec::new(),
            count: 0,
            total: Decimal::new(1699, 2),
        };
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"items":[],"count":0,"total":16.99}"#
        );
    }
}
