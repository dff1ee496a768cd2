//! Unified error system for Bistro
//!
//! This module provides the error handling shared by the cart, the query
//! engine and the HTTP layer:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified error response body
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Catalog errors (foods, categories, restaurants)
//! - 7xxx: Customer errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::ValidationFailed);
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//!
//! // Report missing fields on create
//! let err = AppError::missing_fields(&["name", "price"]);
//! assert_eq!(err.message, "Missing required fields: name, price");
//!
//! // Convert to API response
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 7);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
