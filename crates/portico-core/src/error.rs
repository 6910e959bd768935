//! # Error Types
//!
//! Shared error type for the foundational crate. All errors across the
//! workspace use `thiserror` for derive-based `Display` and `Error`
//! implementations; domain crates define their own enums and convert from
//! `CoreError` where needed.

use thiserror::Error;

/// Errors produced by the foundational types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input failed validation (bad timestamp, unknown role name, etc.).
    #[error("validation error: {0}")]
    Validation(String),
}
