//! Display formatting for terminal output
//!
//! Renders expense views and statistics as plain text, with currency and
//! relative dates formatted per the user's settings.

pub mod expense;
pub mod format;

pub use expense::{format_expense_row, format_expense_view, format_stats};
pub use format::{
    category_label, format_bar, format_currency, format_percentage, format_relative_date,
    separator, truncate,
};
