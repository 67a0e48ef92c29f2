//! YAML export of an expense view
//!
//! Same content as the JSON export, in a human-readable form.

use crate::error::{SpendviewError, SpendviewResult};
use crate::export::json::ViewExport;
use crate::reports::ExpenseView;
use std::io::Write;

/// Export a view as YAML
pub fn export_view_yaml<W: Write>(view: &ExpenseView, writer: &mut W) -> SpendviewResult<()> {
    let export = ViewExport::from_view(view);
    let map_err = |e: std::io::Error| SpendviewError::Export(e.to_string());

    writeln!(writer, "# spendview expense export").map_err(map_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(map_err)?;
    writeln!(writer, "# Filter: {}", export.filter.mode).map_err(map_err)?;
    if export.filter.has_query() {
        writeln!(writer, "# Search: {}", export.filter.query.trim()).map_err(map_err)?;
    }
    writeln!(writer).map_err(map_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendviewError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money};
    use crate::reports::{ExpenseFilter, FilterMode, ViewOptions};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let expenses = vec![Expense::new("a", Money::from_cents(4500), Category::Rent, today)
            .with_tags(["home"])];
        let view = ExpenseView::generate(
            &expenses,
            &ExpenseFilter::new().mode(FilterMode::Month),
            today,
            &ViewOptions::default(),
        );

        let mut buffer = Vec::new();
        export_view_yaml(&view, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# spendview expense export"));
        assert!(text.contains("# Filter: month"));

        let body: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(body["schema_version"].as_str(), Some("1.0.0"));
        assert_eq!(body["groups"][0]["label"].as_str(), Some("January 2024"));
        assert_eq!(body["groups"][0]["expenses"][0]["tags"][0].as_str(), Some("home"));
    }
}
