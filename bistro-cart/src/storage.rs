//! 本地持久化槽位
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `slots` | slot key | raw bytes (JSON) | 持久化槽位 (last write wins) |
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns, so a cart
//! mutation is durable once [`CartStorage::write`] returns `Ok`.

use parking_lot::Mutex;
use redb::{Database, ReadableDatabase, TableDefinition};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::StorageResult;

/// Table for storing slots: key = slot name, value = serialized payload
const SLOTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("slots");

/// Durable local key-value slot
///
/// The cart only ever uses one key; the trait stays key-based so several
/// sessions can share one backend.
pub trait CartStorage {
    /// Read the raw payload stored under `key`, `None` if never written
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Replace the payload stored under `key`
    fn write(&self, key: &str, value: &[u8]) -> StorageResult<()>;
}

/// Slot storage backed by redb
#[derive(Clone)]
pub struct RedbStorage {
    db: Arc<Database>,
}

impl RedbStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so readers never see TableDoesNotExist
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SLOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl CartStorage for RedbStorage {
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SLOTS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn write(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(SLOTS_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }
}

/// In-memory slot storage
///
/// Cloning yields another handle to the same slots, which lets tests reopen a
/// cart against what a previous session persisted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot directly (used to simulate stale or corrupt payloads)
    pub fn with_slot(self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.slots.lock().insert(key.into(), value.into());
        self
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        self.slots.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
