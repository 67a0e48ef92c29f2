//! Storage initialization
//!
//! Handles first-run setup: directories and an empty expense list.

use crate::config::paths::SpendviewPaths;
use crate::error::SpendviewError;
use crate::models::Expense;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Returns `true` if an empty expense list was created.
pub fn initialize_storage(paths: &SpendviewPaths) -> Result<bool, SpendviewError> {
    paths.ensure_directories()?;

    if paths.expenses_file().exists() {
        return Ok(false);
    }

    write_json_atomic(paths.expenses_file(), &Vec::<Expense>::new())?;
    tracing::info!(path = %paths.expenses_file().display(), "Created empty expense list");
    Ok(true)
}
