//! Bistro Cart - 购物车状态容器
//!
//! # 架构概述
//!
//! - [`CartStore`]: 显式注入的购物车对象，持有行项目和派生的 count / total
//! - [`CartStorage`]: 本地持久化槽位抽象 (key-value)
//! - [`RedbStorage`]: 基于 redb 的持久化实现
//! - [`MemoryStorage`]: 内存实现 (测试 / 临时会话)
//!
//! 每次修改都会先写入存储槽位，成功后才提交到内存，
//! 因此持久化视图与内存视图始终一致。
//!
//! ```
//! use bistro_cart::{CartStore, MemoryStorage};
//! use rust_decimal::Decimal;
//! use shared::CartItemInput;
//!
//! let mut cart = CartStore::open(MemoryStorage::new());
//! let pizza = CartItemInput {
//!     id: "food-001".into(),
//!     name: "Margherita".into(),
//!     price: Decimal::from(2500),
//!     image_url: String::new(),
//!     restaurant_id: "rest-001".into(),
//!     restaurant_name: "Trattoria".into(),
//! };
//! cart.add_item(pizza.clone(), 1).unwrap();
//! cart.add_item(pizza, 2).unwrap();
//! assert_eq!(cart.count(), 3);
//! assert_eq!(cart.total(), Decimal::from(7500));
//! ```

pub mod error;
pub mod storage;
pub mod store;

pub use error::{CartError, CartResult, StorageError, StorageResult};
pub use storage::{CartStorage, MemoryStorage, RedbStorage};
pub use store::{CART_STORAGE_KEY, CartStore};
