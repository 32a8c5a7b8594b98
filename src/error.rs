//! Custom error types for finance-buddy
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant names the precondition that
//! was violated so callers never have to fall back to a generic message.

use thiserror::Error;

/// The main error type for finance-buddy operations
#[derive(Error, Debug)]
pub enum BuddyError {
    /// Malformed input: empty name, negative or non-finite amount
    #[error("Validation error: {0}")]
    Validation(String),

    /// Out-of-range list position
    #[error("Index {index} is out of range for the {list} list (length {len})")]
    Index {
        list: &'static str,
        index: usize,
        len: usize,
    },

    /// Affordability projection with no income accrual and an unmet target
    #[error("Cannot project: no income accrual ({0})")]
    DivisionByZero(String),

    /// No active session
    #[error("Not logged in: {0}")]
    Unauthorized(String),

    /// Username/password pair did not match a registered user
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Storage collaborator failure
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BuddyError {
    /// Create an index error for one of the cost item lists
    pub fn item_index(list: &'static str, index: usize, len: usize) -> Self {
        Self::Index { list, index, len }
    }

    /// Create a validation error for arithmetic that left the cents range
    pub fn amount_out_of_range(context: impl std::fmt::Display) -> Self {
        Self::Validation(format!("amount out of range: {}", context))
    }

    /// Create a "not found" error for stored budget state
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means the caller has to log in first
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BuddyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BuddyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finance-buddy operations
pub type BuddyResult<T> = Result<T, BuddyError>;
