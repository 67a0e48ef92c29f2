//! spendview - expense grouping, filtering and statistics
//!
//! Takes a flat list of expense records and produces a filtered month → week
//! hierarchy with per-group totals, plus today's total, the current month's
//! total and a ranked category breakdown.
//!
//! # Architecture
//!
//! - `models`: expense records, categories and the `Money` type
//! - `reports`: the pure engine (filter, grouping, statistics, combined view)
//! - `storage`: loading expense lists from JSON or CSV files
//! - `display`: terminal rendering
//! - `export`: CSV, JSON and YAML output
//! - `config`: paths and user settings
//! - `cli`: command handlers for the binary
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use spendview::models::{Category, Expense, Money};
//! use spendview::reports::{ExpenseFilter, ExpenseView, FilterMode, ViewOptions};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let expenses = vec![Expense::new("a", Money::from_cents(4500), Category::Food, today)];
//!
//! let filter = ExpenseFilter::new().mode(FilterMode::Today);
//! let view = ExpenseView::generate(&expenses, &filter, today, &ViewOptions::default());
//!
//! assert_eq!(view.groups[0].label, "January 2024");
//! assert_eq!(view.stats.today_total, Money::from_cents(4500));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::SpendviewError;
