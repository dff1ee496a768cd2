//! Shared types for Bistro
//!
//! Common types used across the workspace: catalog models, cart models,
//! the unified error system, and currency/date helpers.

pub mod cart;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use cart::{CartItemInput, CartLineItem, CartSummary};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
