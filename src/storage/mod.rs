//! Storage layer for spendview
//!
//! Loads the expense list the engine works on. The list is a file produced
//! outside this crate: a dump of the expenses API (either the bare array or
//! the `{ "success": ..., "data": [...] }` response envelope) or a CSV file.

pub mod csv_import;
pub mod file_io;
pub mod init;

pub use csv_import::read_expenses_csv;
pub use file_io::{read_json_optional, read_json_required, write_json_atomic};
pub use init::initialize_storage;

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{SpendviewError, SpendviewResult};
use crate::models::Expense;

/// Read-only source of the current expense list
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file this store reads
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_csv(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    }

    /// Load and validate every expense
    ///
    /// Fails on the first record that is malformed or breaks an invariant.
    pub fn load(&self) -> SpendviewResult<Vec<Expense>> {
        let expenses = if self.is_csv() {
            self.load_csv()?
        } else {
            let document: Value = read_json_required(&self.path)?;
            expenses_from_json(document)?
        };

        for expense in &expenses {
            expense
                .validate()
                .map_err(|e| SpendviewError::invalid_expense(&expense.id, e))?;
        }

        tracing::debug!(
            path = %self.path.display(),
            count = expenses.len(),
            "Loaded expenses"
        );
        Ok(expenses)
    }

    fn load_csv(&self) -> SpendviewResult<Vec<Expense>> {
        if !self.path.exists() {
            return Err(SpendviewError::expense_file_not_found(
                self.path.display().to_string(),
            ));
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            SpendviewError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;
        read_expenses_csv(&mut reader)
    }
}

/// Extract the expense list from an API response or a bare array
pub fn expenses_from_json(document: Value) -> SpendviewResult<Vec<Expense>> {
    let list = match document {
        Value::Array(_) => document,
        Value::Object(mut envelope) => {
            if envelope.get("success").and_then(Value::as_bool) == Some(false) {
                let message = envelope
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("request failed");
                return Err(SpendviewError::Storage(format!(
                    "Expense data marks a failed request: {}",
                    message
                )));
            }

            envelope.remove("data").ok_or_else(|| {
                SpendviewError::Storage("Expected an expense array or a 'data' field".into())
            })?
        }
        _ => {
            return Err(SpendviewError::Storage(
                "Expected an expense array or a 'data' field".into(),
            ))
        }
    };

    Ok(serde_json::from_value(list)?)
}
