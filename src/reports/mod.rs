//! Expense reports
//!
//! The grouping engine: filter and search, month/week grouping, and summary
//! statistics. Everything here is pure; "today" is always passed in.

pub mod filter;
pub mod grouping;
pub mod stats;
pub mod view;

pub use filter::{ExpenseFilter, FilterMode, FilterParseError};
pub use grouping::{group_by_period, week_start_of, MonthGroup, WeekGroup};
pub use stats::{CategoryStat, ExpenseStats, DEFAULT_BREAKDOWN_LIMIT};
pub use view::{ExpenseView, ViewOptions};
