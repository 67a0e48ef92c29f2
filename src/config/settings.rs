//! User settings for spendview
//!
//! Manages display and grouping preferences: currency symbol, first day of
//! the week, which clock "today" is read from, and the breakdown size.

use chrono::{Local, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::paths::SpendviewPaths;
use crate::error::SpendviewError;
use crate::reports::{ViewOptions, DEFAULT_BREAKDOWN_LIMIT};
use crate::storage::file_io::{read_json_optional, write_json_atomic};

/// Which calendar "today" is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeBasis {
    /// UTC calendar date (default; matches how record timestamps are reduced)
    #[default]
    Utc,
    /// The machine's local calendar date
    Local,
}

impl TimeBasis {
    /// Capture today's date once for a whole grouping/statistics pass
    pub fn today(&self) -> NaiveDate {
        match self {
            Self::Utc => Utc::now().date_naive(),
            Self::Local => Local::now().date_naive(),
        }
    }
}

/// User settings for spendview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for absolute dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// First day of week (0 = Sunday, 1 = Monday, ... 6 = Saturday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,

    /// Clock used to decide what "today" is
    #[serde(default)]
    pub time_basis: TimeBasis,

    /// Number of categories shown in the monthly breakdown
    #[serde(default = "default_breakdown_limit")]
    pub breakdown_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%-d %b %Y".to_string()
}

fn default_first_day_of_week() -> u8 {
    0 // Sunday
}

fn default_breakdown_limit() -> usize {
    DEFAULT_BREAKDOWN_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            first_day_of_week: default_first_day_of_week(),
            time_basis: TimeBasis::default(),
            breakdown_limit: default_breakdown_limit(),
        }
    }
}

impl Settings {
    /// The configured first day of the week
    ///
    /// Out-of-range values fall back to Sunday.
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    /// Grouping and statistics options derived from these settings
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            week_start: self.week_start(),
            breakdown_limit: self.breakdown_limit,
        }
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendviewPaths) -> Result<Self, SpendviewError> {
        let settings_path = paths.settings_file();

        let loaded = read_json_optional::<Settings>(&settings_path).map_err(|e| match e {
            SpendviewError::Storage(message) => SpendviewError::Config(message),
            other => other,
        })?;

        match loaded {
            Some(settings) => {
                tracing::debug!(path = %settings_path.display(), "Loaded settings");
                Ok(settings)
            }
            // Don't save yet - let caller decide when to persist
            None => Ok(Settings::default()),
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendviewPaths) -> Result<(), SpendviewError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.week_start(), Weekday::Sun);
        assert_eq!(settings.time_basis, TimeBasis::Utc);
        assert_eq!(settings.breakdown_limit, DEFAULT_BREAKDOWN_LIMIT);
    }

    #[test]
    fn test_week_start_mapping() {
        let mut settings = Settings::default();
        settings.first_day_of_week = 1;
        assert_eq!(settings.week_start(), Weekday::Mon);

        settings.first_day_of_week = 42;
        assert_eq!(settings.week_start(), Weekday::Sun);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendviewPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.time_basis = TimeBasis::Local;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.time_basis, TimeBasis::Local);
    }

    #[test]
    fn test_save_replaces_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendviewPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"breakdown_limit": 9}"#).unwrap();

        let mut settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.breakdown_limit, 9);

        settings.breakdown_limit = 3;
        settings.save(&paths).unwrap();

        assert!(!temp_dir.path().join("config.json.tmp").exists());
        assert_eq!(Settings::load_or_create(&paths).unwrap().breakdown_limit, 3);
        assert!(paths.is_initialized());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.breakdown_limit, 5);
        assert_eq!(settings.first_day_of_week, 0);
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendviewPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SpendviewError::Config(_)));
    }
}
