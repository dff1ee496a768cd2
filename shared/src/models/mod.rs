//! Data models
//!
//! Shared between the server and dashboard clients (via API).
//! Wire format is camelCase JSON; IDs are `<prefix>-NNN` strings.

pub mod category;
pub mod customer;
pub mod food;
pub mod restaurant;

// Re-exports
pub use category::*;
pub use customer::*;
pub use food::*;
pub use restaurant::*;
