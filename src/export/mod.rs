//! Export module for spendview
//!
//! Writes an expense view in one of three formats:
//! - CSV: one row per expense with its month and week bucket
//! - JSON: the grouped view and statistics for other tools
//! - YAML: the same content in a human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_view_csv;
pub use self::json::{export_view_json, ExportMetadata, ViewExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_view_yaml;
