//! Statistics stage
//!
//! Summary figures computed from the full expense list, independent of any
//! active filter or search.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Category, Expense, Money};

/// Default number of categories in the monthly breakdown
pub const DEFAULT_BREAKDOWN_LIMIT: usize = 5;

/// One bar of the monthly category breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStat {
    pub category: Category,
    pub amount: Money,
    /// `amount` relative to the largest amount in the breakdown (0.0..=1.0)
    pub fraction: f64,
}

/// Totals for today and the current month, plus the category breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseStats {
    pub today_total: Money,
    pub month_total: Money,
    /// Top categories of the current month, largest first
    pub categories: Vec<CategoryStat>,
}

impl ExpenseStats {
    /// Compute statistics relative to `today`
    ///
    /// The breakdown keeps at most `limit` categories. Equal amounts keep the
    /// order their categories were first seen in.
    pub fn compute(expenses: &[Expense], today: NaiveDate, limit: usize) -> Self {
        let mut today_total = Money::zero();
        let mut month_total = Money::zero();
        let mut totals: Vec<(Category, Money)> = Vec::new();

        for expense in expenses {
            if expense.date == today {
                today_total += expense.amount;
            }

            if expense.date.year() != today.year() || expense.date.month() != today.month() {
                continue;
            }

            month_total += expense.amount;
            match totals.iter_mut().find(|(c, _)| *c == expense.category) {
                Some((_, amount)) => *amount += expense.amount,
                None => totals.push((expense.category.clone(), expense.amount)),
            }
        }

        Self {
            today_total,
            month_total,
            categories: breakdown(totals, limit),
        }
    }

    /// Check if there is nothing to chart
    pub fn has_breakdown(&self) -> bool {
        !self.categories.is_empty()
    }
}

fn breakdown(mut totals: Vec<(Category, Money)>, limit: usize) -> Vec<CategoryStat> {
    // sort_by is stable, so ties keep first-seen order
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.truncate(limit);

    let max = totals
        .iter()
        .map(|(_, amount)| *amount)
        .max()
        .unwrap_or_default();

    totals
        .into_iter()
        .map(|(category, amount)| {
            let fraction = if max.cents() <= 0 {
                0.0
            } else {
                amount.cents() as f64 / max.cents() as f64
            };
            CategoryStat {
                category,
                amount,
                fraction,
            }
        })
        .collect()
}
