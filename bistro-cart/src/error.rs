//! Cart error types

use thiserror::Error;

/// Storage errors (durable slot backend)
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Cart operation errors
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Quantity out of range: {0}")]
    QuantityOutOfRange(i64),

    #[error("Failed to persist cart: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to serialize cart: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CartResult<T> = Result<T, CartError>;
