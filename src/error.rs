//! Custom error types for spendview
//!
//! The grouping engine itself never fails. These errors cover the layers
//! around it: configuration, loading expense files and exporting views.

use thiserror::Error;

/// The main error type for spendview operations
#[derive(Error, Debug)]
pub enum SpendviewError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for loaded records
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Errors reading an expense file
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendviewError {
    /// Create a "not found" error for expense files
    pub fn expense_file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense file",
            identifier: identifier.into(),
        }
    }

    /// Create a validation error for a single expense record
    pub fn invalid_expense(id: &str, reason: impl std::fmt::Display) -> Self {
        Self::Validation(format!("expense '{}': {}", id, reason))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SpendviewError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendviewError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spendview operations
pub type SpendviewResult<T> = Result<T, SpendviewError>;
