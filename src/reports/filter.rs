//! Filter and search stage
//!
//! Narrows an expense list to what the current view asks for: a free-text
//! search first, then a date window relative to a captured "today".

use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::models::Expense;

/// Date window applied after search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// No date restriction
    #[default]
    All,
    /// Only expenses dated today
    Today,
    /// The seven days up to and including today
    Week,
    /// The current calendar month
    Month,
}

impl FilterMode {
    /// Check if an expense date falls in this window
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Today => date == today,
            Self::Week => date >= today - Duration::days(7) && date <= today,
            Self::Month => date.year() == today.year() && date.month() == today.month(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterMode {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(FilterParseError(s.to_string())),
        }
    }
}

/// Error for an unrecognised filter name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParseError(pub String);

impl fmt::Display for FilterParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown filter '{}' (expected all, today, week or month)",
            self.0
        )
    }
}

impl std::error::Error for FilterParseError {}

/// Filter and search criteria for one render
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpenseFilter {
    /// Date window
    pub mode: FilterMode,
    /// Free-text query (empty matches everything)
    pub query: String,
}

impl ExpenseFilter {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a date window
    pub fn mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the search query
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Check if a non-empty search query is set
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Check if an expense matches the search query
    ///
    /// Case-insensitive substring match on the description, category name,
    /// two-decimal amount, or any tag.
    pub fn matches_search(&self, expense: &Expense) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        let contains = |text: &str| text.to_lowercase().contains(&query);

        expense.description.as_deref().is_some_and(contains)
            || contains(expense.category.name())
            || expense.amount.to_decimal_string().contains(&query)
            || expense.tags.iter().any(|tag| contains(tag))
    }

    /// Check if an expense passes both search and date window
    pub fn matches(&self, expense: &Expense, today: NaiveDate) -> bool {
        self.matches_search(expense) && self.mode.contains(expense.date, today)
    }

    /// Apply the filter, keeping the input order
    pub fn apply<'a>(&self, expenses: &'a [Expense], today: NaiveDate) -> Vec<&'a Expense> {
        expenses
            .iter()
            .filter(|expense| self.matches_search(expense))
            .filter(|expense| self.mode.contains(expense.date, today))
            .collect()
    }
}
