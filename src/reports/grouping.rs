//! Grouping stage
//!
//! Organizes a filtered expense list into a month → week hierarchy, most
//! recent first. Buckets keep the order they were first seen in after the
//! date sort, so both levels come out newest first.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::models::{Expense, Money};

/// Expenses of one week within a month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekGroup {
    /// First day of the week
    pub start: NaiveDate,
    /// e.g. "Week of Jan 14"
    pub label: String,
    pub expenses: Vec<Expense>,
    pub total: Money,
}

impl WeekGroup {
    fn new(start: NaiveDate) -> Self {
        Self {
            start,
            label: format!("Week of {}", start.format("%b %-d")),
            expenses: Vec::new(),
            total: Money::zero(),
        }
    }

    /// ISO date of the week start, used as the bucket key
    pub fn key(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }
}

/// Expenses of one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    pub year: i32,
    pub month: u32,
    /// e.g. "January 2024"
    pub label: String,
    pub weeks: Vec<WeekGroup>,
    /// Every expense in the month, across all weeks
    pub expenses: Vec<Expense>,
    pub total: Money,
}

impl MonthGroup {
    fn new(year: i32, month: u32, label: String) -> Self {
        Self {
            year,
            month,
            label,
            weeks: Vec::new(),
            expenses: Vec::new(),
            total: Money::zero(),
        }
    }

    /// `YYYY-MM`, used as the bucket key
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Number of expenses in the month
    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    fn push(&mut self, expense: &Expense, week_start: NaiveDate) {
        self.total += expense.amount;
        self.expenses.push(expense.clone());

        let week = match self.weeks.iter_mut().position(|w| w.start == week_start) {
            Some(index) => &mut self.weeks[index],
            None => {
                self.weeks.push(WeekGroup::new(week_start));
                let last = self.weeks.len() - 1;
                &mut self.weeks[last]
            }
        };

        week.total += expense.amount;
        week.expenses.push(expense.clone());
    }
}

/// First day of the week containing `date`
pub fn week_start_of(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() - first_day.num_days_from_monday()) % 7;
    date - Duration::days(i64::from(offset))
}

/// Group expenses by month, then by week within each month
///
/// Expenses are sorted by date descending first (stable for equal dates).
/// An empty input yields no groups.
pub fn group_by_period<'a, I>(expenses: I, first_day: Weekday) -> Vec<MonthGroup>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut sorted: Vec<&Expense> = expenses.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut months: Vec<MonthGroup> = Vec::new();

    for expense in sorted {
        let (year, month) = (expense.date.year(), expense.date.month());

        let group = match months
            .iter_mut()
            .position(|m| m.year == year && m.month == month)
        {
            Some(index) => &mut months[index],
            None => {
                let label = expense.date.format("%B %Y").to_string();
                months.push(MonthGroup::new(year, month, label));
                let last = months.len() - 1;
                &mut months[last]
            }
        };

        group.push(expense, week_start_of(expense.date, first_day));
    }

    months
}
