//! JSON export of an expense view
//!
//! Wraps the grouped view with a schema version and export metadata so the
//! output can be consumed by other tools.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{SpendviewError, SpendviewResult};
use crate::models::Money;
use crate::reports::{ExpenseFilter, ExpenseStats, ExpenseView, MonthGroup};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Serialized form of an [`ExpenseView`]
#[derive(Debug, Clone, Serialize)]
pub struct ViewExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// The date the view treated as today
    pub today: NaiveDate,

    pub filter: &'a ExpenseFilter,

    pub groups: &'a [MonthGroup],

    pub stats: &'a ExpenseStats,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub month_count: usize,
    pub expense_count: usize,
    pub matched_total: Money,
    /// Earliest matched expense date
    pub earliest_expense: Option<NaiveDate>,
    /// Latest matched expense date
    pub latest_expense: Option<NaiveDate>,
}

impl<'a> ViewExport<'a> {
    /// Wrap a view for export
    pub fn from_view(view: &'a ExpenseView) -> Self {
        let dates = view
            .groups
            .iter()
            .flat_map(|g| g.expenses.iter().map(|e| e.date));

        let metadata = ExportMetadata {
            month_count: view.groups.len(),
            expense_count: view.matched_count(),
            matched_total: view.matched_total(),
            earliest_expense: dates.clone().min(),
            latest_expense: dates.max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            today: view.today,
            filter: &view.filter,
            groups: &view.groups,
            stats: &view.stats,
            metadata,
        }
    }
}

/// Export a view as JSON
pub fn export_view_json<W: Write>(
    view: &ExpenseView,
    writer: &mut W,
    pretty: bool,
) -> SpendviewResult<()> {
    let export = ViewExport::from_view(view);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| SpendviewError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| SpendviewError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense};
    use crate::reports::ViewOptions;
    use serde_json::Value;

    fn view() -> ExpenseView {
        let expenses = vec![
            Expense::new(
                "a",
                Money::from_cents(10000),
                Category::Food,
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            ),
            Expense::new(
                "b",
                Money::from_cents(5000),
                Category::Transport,
                NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
            ),
        ];
        ExpenseView::generate(
            &expenses,
            &ExpenseFilter::new(),
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            &ViewOptions::default(),
        )
    }

    #[test]
    fn test_json_export_structure() {
        let mut buffer = Vec::new();
        export_view_json(&view(), &mut buffer, true).unwrap();

        let value: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["today"], "2024-02-10");
        assert_eq!(value["filter"]["mode"], "all");
        assert_eq!(value["groups"][0]["label"], "February 2024");
        assert_eq!(value["groups"][1]["weeks"][0]["start"], "2024-01-14");
        assert_eq!(value["metadata"]["expense_count"], 2);
        assert_eq!(value["metadata"]["matched_total"], 150.0);
        assert_eq!(value["metadata"]["earliest_expense"], "2024-01-15");
        assert_eq!(value["stats"]["month_total"], 50.0);
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let mut buffer = Vec::new();
        export_view_json(&view(), &mut buffer, false).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.trim_end().lines().count(), 1);
    }
}
