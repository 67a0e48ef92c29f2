//! CSV expense files
//!
//! Expected header: `id,date,amount,category,description,tags,payment_method`.
//! Column order is free; `description`, `tags` and `payment_method` may be
//! missing or blank. Tags are separated by `;`.

use csv::{Reader, StringRecord};
use std::io::Read;

use crate::error::{SpendviewError, SpendviewResult};
use crate::models::{parse_expense_date, Category, Expense, Money, PaymentMethod};

/// Column positions found in the header row
#[derive(Debug, Clone, Copy)]
struct ColumnMapping {
    id: usize,
    date: usize,
    amount: usize,
    category: usize,
    description: Option<usize>,
    tags: Option<usize>,
    payment_method: Option<usize>,
}

impl ColumnMapping {
    fn from_headers(headers: &StringRecord) -> SpendviewResult<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };
        let require = |names: &[&str]| {
            find(names).ok_or_else(|| {
                SpendviewError::Storage(format!("CSV is missing the '{}' column", names[0]))
            })
        };

        Ok(Self {
            id: require(&["id", "_id"])?,
            date: require(&["date"])?,
            amount: require(&["amount"])?,
            category: require(&["category"])?,
            description: find(&["description", "memo"]),
            tags: find(&["tags"]),
            payment_method: find(&["payment_method", "paymentMethod"]),
        })
    }
}

fn optional_field<'r>(record: &'r StringRecord, column: Option<usize>) -> Option<&'r str> {
    column
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
    line: usize,
) -> SpendviewResult<Expense> {
    let field = |i: usize| record.get(i).map(str::trim).unwrap_or("");
    let invalid = |what: &str, value: &str| {
        SpendviewError::Storage(format!("line {}: invalid {} '{}'", line, what, value))
    };

    let date = parse_expense_date(field(mapping.date))
        .ok_or_else(|| invalid("date", field(mapping.date)))?;
    let amount = Money::parse(field(mapping.amount))
        .map_err(|_| invalid("amount", field(mapping.amount)))?;

    let mut expense = Expense::new(
        field(mapping.id),
        amount,
        Category::from_name(field(mapping.category)),
        date,
    );

    if let Some(description) = optional_field(record, mapping.description) {
        expense = expense.with_description(description);
    }

    if let Some(tags) = optional_field(record, mapping.tags) {
        expense = expense.with_tags(
            tags.split(';')
                .map(str::trim)
                .filter(|t| !t.is_empty()),
        );
    }

    if let Some(method) = optional_field(record, mapping.payment_method) {
        expense = expense.with_payment_method(PaymentMethod::from(method.to_string()));
    }

    Ok(expense)
}

/// Read every expense from a CSV reader
pub fn read_expenses_csv<R: Read>(reader: &mut Reader<R>) -> SpendviewResult<Vec<Expense>> {
    let headers = reader
        .headers()
        .map_err(|e| SpendviewError::Storage(format!("Failed to read CSV header: {}", e)))?
        .clone();
    let mapping = ColumnMapping::from_headers(&headers)?;

    let mut expenses = Vec::new();
    for (index, result) in reader.records().enumerate() {
        // Header is line 1
        let line = index + 2;
        let record = result
            .map_err(|e| SpendviewError::Storage(format!("line {}: {}", line, e)))?;
        expenses.push(parse_record(&record, &mapping, line)?);
    }

    Ok(expenses)
}
