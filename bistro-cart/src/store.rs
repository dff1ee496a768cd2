//! 购物车存储
//!
//! # 不变量
//!
//! - 每个商品 id 最多一个行项目
//! - 行项目数量 >= 1
//! - `count` / `total` 总是由 `items` 重新计算，不单独修改
//! - 修改先持久化再提交到内存

use rust_decimal::Decimal;
use shared::{CartItemInput, CartLineItem, CartSummary};

use crate::error::{CartError, CartResult};
use crate::storage::CartStorage;

/// Fixed key of the durable slot holding the serialized line items
pub const CART_STORAGE_KEY: &str = "bistro-cart";

/// 购物车 - 单会话、单写者
pub struct CartStore<S: CartStorage> {
    storage: S,
    items: Vec<CartLineItem>,
    count: u64,
    total: Decimal,
}

impl<S: CartStorage> CartStore<S> {
    /// Open the cart, restoring items from the durable slot
    ///
    /// A missing slot starts an empty cart. An unreadable or corrupt slot is
    /// logged and also starts empty; the error never reaches the caller.
    pub fn open(storage: S) -> Self {
        let items = load_items(&storage);
        let mut store = Self {
            storage,
            items: Vec::new(),
            count: 0,
            total: Decimal::ZERO,
        };
        store.set_items(items);
        store
    }

    // ========== Mutations ==========

    /// Add `quantity` of an item, merging with an existing line for the same id
    ///
    /// A quantity of 0 leaves the cart untouched.
    pub fn add_item(&mut self, item: CartItemInput, quantity: u32) -> CartResult<()> {
        if quantity == 0 {
            return Ok(());
        }

        let mut next = self.items.clone();
        match next.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => next.push(CartLineItem::new(item, quantity)),
        }
        self.commit(next)
    }

    /// Add a single unit of an item
    pub fn add_one(&mut self, item: CartItemInput) -> CartResult<()> {
        self.add_item(item, 1)
    }

    /// Set the quantity of a line exactly; `<= 0` removes the line
    ///
    /// Quantities beyond `u32::MAX` are rejected and leave the cart untouched.
    pub fn update_quantity(&mut self, id: &str, new_quantity: i64) -> CartResult<()> {
        if new_quantity <= 0 {
            return self.remove_item(id);
        }

        let quantity =
            u32::try_from(new_quantity).map_err(|_| CartError::QuantityOutOfRange(new_quantity))?;
        let mut next = self.items.clone();
        if let Some(line) = next.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
        }
        self.commit(next)
    }

    /// Remove a line; absent ids are a no-op
    pub fn remove_item(&mut self, id: &str) -> CartResult<()> {
        let next = self
            .items
            .iter()
            .filter(|line| line.id != id)
            .cloned()
            .collect();
        self.commit(next)
    }

    /// Empty the cart
    pub fn clear_cart(&mut self) -> CartResult<()> {
        self.commit(Vec::new())
    }

    /// Checkout finished, the cart is discarded
    pub fn checkout_complete(&mut self) -> CartResult<()> {
        tracing::info!(count = self.count, total = %self.total, "Checkout complete, clearing cart");
        self.clear_cart()
    }

    // ========== Readers ==========

    /// Line items in first-added order
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Σ quantity
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Σ price × quantity
    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.items.clone(),
            count: self.count,
            total: self.total,
        }
    }

    // ========== Internal ==========

    /// Persist `next`, then make it the in-memory state
    fn commit(&mut self, next: Vec<CartLineItem>) -> CartResult<()> {
        self.save(&next)?;
        self.set_items(next);
        Ok(())
    }

    fn save(&self, items: &[CartLineItem]) -> CartResult<()> {
        let payload = serde_json::to_vec(items)?;
        self.storage.write(CART_STORAGE_KEY, &payload)?;
        tracing::debug!(lines = items.len(), bytes = payload.len(), "Cart persisted");
        Ok(())
    }

    fn set_items(&mut self, items: Vec<CartLineItem>) {
        self.items = items;
        self.count = self.items.iter().map(|line| u64::from(line.quantity)).sum();
        self.total = self.items.iter().map(CartLineItem::line_total).sum();
    }
}

/// Read and parse the durable slot, falling back to an empty cart
fn load_items<S: CartStorage>(storage: &S) -> Vec<CartLineItem> {
    let payload = match storage.read(CART_STORAGE_KEY) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read cart slot, starting empty");
            return Vec::new();
        }
    };

    let parsed: Vec<CartLineItem> = match serde_json::from_slice(&payload) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, bytes = payload.len(), "Corrupt cart slot discarded, starting empty");
            return Vec::new();
        }
    };

    // 兜底：丢弃数量为 0 的行，合并重复 id
    let mut items: Vec<CartLineItem> = Vec::with_capacity(parsed.len());
    for line in parsed.into_iter().filter(|line| line.quantity > 0) {
        match items.iter_mut().find(|existing| existing.id == line.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => items.push(line),
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CartError, StorageError, StorageResult};
    use crate::storage::{MemoryStorage, RedbStorage};

    fn item(id: &str, price: i64) -> CartItemInput {
        CartItemInput {
            id: id.to_string(),
            name: format!("Item {id}"),
            price: Decimal::from(price),
            image_url: format!("/images/{id}.jpg"),
            restaurant_id: "rest-001".to_string(),
            restaurant_name: "Trattoria Roma".to_string(),
        }
    }

    fn assert_totals_consistent<S: CartStorage>(cart: &CartStore<S>) {
        let count: u64 = cart.items().iter().map(|l| u64::from(l.quantity)).sum();
        let total: Decimal = cart
            .items()
            .iter()
            .map(|l| l.price * Decimal::from(l.quantity))
            .sum();
        assert_eq!(cart.count(), count, "count drifted from items");
        assert_eq!(cart.total(), total, "total drifted from items");
    }

    /// Storage whose writes always fail
    struct BrokenStorage;

    impl CartStorage for BrokenStorage {
        fn read(&self, _key: &str) -> StorageResult<Option<Vec<u8>>> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &[u8]) -> StorageResult<()> {
            Err(StorageError::Unavailable("disk full".to_string()))
        }
    }

    #[test]
    fn test_add_merges_same_id() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add_item(item("food-001", 2500), 1).unwrap();
        cart.add_item(item("food-001", 2500), 2).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get("food-001").unwrap().quantity, 3);
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Decimal::from(7500));
    }

    #[test]
    fn test_merge_sums_every_add() {
        let mut cart = CartStore::open(MemoryStorage::new());
        let quantities = [1u32, 4, 2, 7, 1];
        for q in quantities {
            cart.add_item(item("food-005", 100), q).unwrap();
        }
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get("food-005").unwrap().quantity, quantities.iter().sum::<u32>());
    }

    #[test]
    fn test_add_one_and_order() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add_one(item("food-002", 800)).unwrap();
        cart.add_one(item("food-001", 1200)).unwrap();
        cart.add_one(item("food-002", 800)).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["food-002", "food-001"]);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add_item(item("food-001", 500), 0).unwrap();
        assert!(cart.is_empty());
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_update_quantity_replaces() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add_item(item("food-001", 500), 4).unwrap();
        cart.update_quantity("food-001", 2).unwrap();
        assert_eq!(cart.get("food-001").unwrap().quantity, 2);
        assert_eq!(cart.total(), Decimal::from(1000));
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add_item(item("food-001", 500), 1).unwrap();
        cart.update_quantity("food-999", 5).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_update_to_zero_or_negative_removes() {
        for quantity in [0, -5] {
            let mut updated = CartStore::open(MemoryStorage::new());
            updated.add_item(item("food-001", 500), 2).unwrap();
            updated.add_item(item("food-002", 300), 1).unwrap();
            updated.update_quantity("food-001", quantity).unwrap();

            let mut removed = CartStore::open(MemoryStorage::new());
            removed.add_item(item("food-001", 500), 2).unwrap();
            removed.add_item(item("food-002", 300), 1).unwrap();
            removed.remove_item("food-001").unwrap();

            assert!(updated.get("food-001").is_none());
            assert_eq!(updated.items(), removed.items());
            assert_eq!(updated.total(), removed.total());
        }
    }

    #[test]
    fn test_update_quantity_out_of_range_rejected() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add_item(item("food-001", 1), 1).unwrap();

        let err = cart.update_quantity("food-001", i64::MAX).unwrap_err();
        assert!(matches!(err, CartError::QuantityOutOfRange(i64::MAX)));
        assert_eq!(cart.get("food-001").unwrap().quantity, 1);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_count_does_not_overflow_at_max_quantity() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add_item(item("food-001", 1), 1).unwrap();
        cart.update_quantity("food-001", i64::from(u32::MAX)).unwrap();
        cart.add_item(item("food-002", 1), 1).unwrap();
        cart.add_item(item("food-001", 1), 1).unwrap();

        assert_eq!(cart.get("food-001").unwrap().quantity, u32::MAX);
        assert_eq!(cart.count(), u64::from(u32::MAX) + 1);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add_item(item("food-001", 500), 2).unwrap();
        let before = cart.items().to_vec();

        cart.remove_item("food-404").unwrap();
        assert_eq!(cart.items(), before.as_slice());
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_totals_consistent_across_operations() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add_item(item("food-001", 1250), 2).unwrap();
        assert_totals_consistent(&cart);
        cart.add_item(item("food-002", 899), 1).unwrap();
        assert_totals_consistent(&cart);
        cart.update_quantity("food-001", 5).unwrap();
        assert_totals_consistent(&cart);
        cart.add_item(item("food-003", 450), 3).unwrap();
        assert_totals_consistent(&cart);
        cart.remove_item("food-002").unwrap();
        assert_totals_consistent(&cart);
        cart.update_quantity("food-003", -1).unwrap();
        assert_totals_consistent(&cart);

        assert_eq!(cart.count(), 5);
        assert_eq!(cart.total(), Decimal::from(6250));
    }

    #[test]
    fn test_clear_and_checkout() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add_item(item("food-001", 500), 2).unwrap();
        cart.clear_cart().unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);

        cart.add_item(item("food-002", 500), 1).unwrap();
        cart.checkout_complete().unwrap();
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let storage = MemoryStorage::new();
        let mut cart = CartStore::open(storage.clone());

        cart.add_item(item("food-001", 500), 2).unwrap();
        let persisted: Vec<CartLineItem> =
            serde_json::from_slice(&storage.read(CART_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(persisted.as_slice(), cart.items());

        cart.update_quantity("food-001", 7).unwrap();
        let persisted: Vec<CartLineItem> =
            serde_json::from_slice(&storage.read(CART_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(persisted[0].quantity, 7);

        cart.clear_cart().unwrap();
        assert_eq!(
            storage.read(CART_STORAGE_KEY).unwrap().as_deref(),
            Some(&b"[]"[..])
        );
    }

    #[test]
    fn test_reopen_restores_items() {
        let storage = MemoryStorage::new();
        {
            let mut cart = CartStore::open(storage.clone());
            cart.add_item(item("food-001", 2500), 3).unwrap();
            cart.add_item(item("food-007", 450), 1).unwrap();
        }

        let cart = CartStore::open(storage);
        let pairs: Vec<(&str, u32)> = cart
            .items()
            .iter()
            .map(|l| (l.id.as_str(), l.quantity))
            .collect();
        assert_eq!(pairs, vec![("food-001", 3), ("food-007", 1)]);
        assert_eq!(cart.total(), Decimal::from(7950));
    }

    #[test]
    fn test_reopen_redb_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.redb");
        {
            let mut cart = CartStore::open(RedbStorage::open(&path).unwrap());
            cart.add_item(item("food-003", 1899), 2).unwrap();
        }

        let cart = CartStore::open(RedbStorage::open(&path).unwrap());
        assert_eq!(cart.get("food-003").unwrap().quantity, 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_corrupt_slot_starts_empty() {
        let storage = MemoryStorage::new().with_slot(CART_STORAGE_KEY, "{not json");
        let cart = CartStore::open(storage);
        assert!(cart.is_empty());
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_wrong_shape_slot_starts_empty() {
        let storage = MemoryStorage::new().with_slot(CART_STORAGE_KEY, r#"{"items":[]}"#);
        let cart = CartStore::open(storage);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_load_drops_zero_quantity_and_merges_duplicates() {
        let payload = r#"[
            {"id":"food-001","name":"A","price":10,"quantity":2},
            {"id":"food-002","name":"B","price":5,"quantity":0},
            {"id":"food-001","name":"A","price":10,"quantity":1}
        ]"#;
        let cart = CartStore::open(MemoryStorage::new().with_slot(CART_STORAGE_KEY, payload));
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Decimal::from(30));
    }

    #[test]
    fn test_failed_write_leaves_state_unchanged() {
        let mut cart = CartStore::open(BrokenStorage);
        let err = cart.add_item(item("food-001", 500), 1).unwrap_err();
        assert!(matches!(err, CartError::Storage(_)));
        assert!(cart.is_empty());
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_summary_snapshot() {
        let mut cart = CartStore::open(MemoryStorage::new());
        cart.add_item(item("food-001", 300), 2).unwrap();
        let summary = cart.summary();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total, Decimal::from(600));
        assert_eq!(summary.items, cart.items());
    }
}
