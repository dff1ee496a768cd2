//! Listing foods and adding them to a persisted cart, the way the dashboard
//! front end does.

mod common;

use bistro_cart::{CartStore, RedbStorage};
use common::{get, send, state};
use rust_decimal::Decimal;
use shared::CartItemInput;
use shared::models::Food;
use std::str::FromStr;

#[tokio::test]
async fn test_listed_foods_go_into_cart() {
    let res = send(&state(), get("/foods?restaurantId=rest-002&sortBy=price")).await;
    let foods: Vec<Food> = serde_json::from_value(res.body["data"].clone()).unwrap();
    assert_eq!(foods.len(), 4);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.redb");

    {
        let mut cart = CartStore::open(RedbStorage::open(&path).unwrap());
        // Matcha 3.99 x2, Miso 4.50 x1, then Matcha once more
        cart.add_item(CartItemInput::from(&foods[0]), 2).unwrap();
        cart.add_item(CartItemInput::from(&foods[1]), 1).unwrap();
        cart.add_one(CartItemInput::from(&foods[0])).unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.count(), 4);
        assert_eq!(cart.total(), Decimal::from_str("16.47").unwrap());
    }

    let cart = CartStore::open(RedbStorage::open(&path).unwrap());
    assert_eq!(cart.count(), 4);
    assert_eq!(cart.items()[0].id, "food-006");
    assert_eq!(cart.items()[0].restaurant_name, "Sakura House");
    assert_eq!(cart.total(), Decimal::from_str("16.47").unwrap());
}
