//! CSV export of an expense view
//!
//! One row per matched expense, in display order, carrying the month and week
//! bucket it was grouped into.

use crate::error::{SpendviewError, SpendviewResult};
use crate::reports::ExpenseView;
use std::io::Write;

const HEADER: [&str; 11] = [
    "Month",
    "Month Label",
    "Week Start",
    "Week Label",
    "ID",
    "Date",
    "Category",
    "Description",
    "Amount",
    "Payment Method",
    "Tags",
];

/// Export the grouped expenses of a view to CSV
pub fn export_view_csv<W: Write>(view: &ExpenseView, writer: &mut W) -> SpendviewResult<()> {
    let map_err = |e: csv::Error| SpendviewError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(map_err)?;

    for month in &view.groups {
        let month_key = month.key();
        for week in &month.weeks {
            let week_key = week.key();
            for expense in &week.expenses {
                let date = expense.date.to_string();
                let amount = expense.amount.to_decimal_string();
                let payment = expense
                    .payment_method
                    .map(|m| m.name())
                    .unwrap_or_default();
                let tags = expense.tags.join(";");

                csv_writer
                    .write_record([
                        month_key.as_str(),
                        month.label.as_str(),
                        week_key.as_str(),
                        week.label.as_str(),
                        expense.id.as_str(),
                        date.as_str(),
                        expense.category.name(),
                        expense.description.as_deref().unwrap_or(""),
                        amount.as_str(),
                        payment,
                        tags.as_str(),
                    ])
                    .map_err(map_err)?;
            }
        }
    }

    csv_writer
        .flush()
        .map_err(|e| SpendviewError::Export(e.to_string()))?;
    Ok(())
}
