//! Combined expense view
//!
//! One render's worth of output: grouped, filtered expenses plus statistics
//! over the full list, all computed against the same captured date.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use super::filter::ExpenseFilter;
use super::grouping::{group_by_period, MonthGroup};
use super::stats::{ExpenseStats, DEFAULT_BREAKDOWN_LIMIT};
use crate::models::{Expense, Money};

/// Grouping and statistics options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// First day of a week bucket
    pub week_start: Weekday,
    /// Number of categories in the breakdown
    pub breakdown_limit: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            breakdown_limit: DEFAULT_BREAKDOWN_LIMIT,
        }
    }
}

/// Everything needed to render the expense list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseView {
    /// The date "today" was pinned to for this view
    pub today: NaiveDate,
    pub filter: ExpenseFilter,
    pub groups: Vec<MonthGroup>,
    pub stats: ExpenseStats,
}

impl ExpenseView {
    /// Build the view for `expenses`
    ///
    /// Grouping sees only what passes `filter`; statistics always cover the
    /// whole list.
    pub fn generate(
        expenses: &[Expense],
        filter: &ExpenseFilter,
        today: NaiveDate,
        options: &ViewOptions,
    ) -> Self {
        let matching = filter.apply(expenses, today);
        let groups = group_by_period(matching, options.week_start);
        let stats = ExpenseStats::compute(expenses, today, options.breakdown_limit);

        tracing::debug!(
            total = expenses.len(),
            months = groups.len(),
            filter = %filter.mode,
            query = %filter.query,
            %today,
            "Generated expense view"
        );

        Self {
            today,
            filter: filter.clone(),
            groups,
            stats,
        }
    }

    /// Check if nothing matched the filter
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Message for the empty state
    pub fn empty_message(&self) -> &'static str {
        if self.filter.has_query() {
            "No matching expenses"
        } else {
            "No expenses recorded"
        }
    }

    /// Number of expenses that matched the filter
    pub fn matched_count(&self) -> usize {
        self.groups.iter().map(MonthGroup::count).sum()
    }

    /// Sum of every matched expense
    pub fn matched_total(&self) -> Money {
        self.groups.iter().map(|g| g.total).sum()
    }
}
