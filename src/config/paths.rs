//! Path management for spendview
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDVIEW_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/spendview` on Linux, `~/Library/Application Support/spendview`
//!    on macOS, `%APPDATA%\spendview\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SpendviewError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SPENDVIEW_DATA_DIR";

/// Manages all paths used by spendview
#[derive(Debug, Clone)]
pub struct SpendviewPaths {
    base_dir: PathBuf,
}

impl SpendviewPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SpendviewError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory exports are written to by default
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default expense list (`<base>/data/expenses.json`)
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure the base, data and export directories exist
    pub fn ensure_directories(&self) -> Result<(), SpendviewError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendviewError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendviewError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir()).map_err(|e| {
            SpendviewError::Io(format!("Failed to create export directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if spendview has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SpendviewError> {
    ProjectDirs::from("", "", "spendview")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SpendviewError::Config("Could not determine a home directory".into()))
}
