//! Core data models for spendview
//!
//! The expense record as served by the backend, its category and payment
//! method, and the cent-based money type totals are computed in.

pub mod category;
pub mod expense;
pub mod money;

pub use category::Category;
pub use expense::{parse_expense_date, Expense, ExpenseValidationError, PaymentMethod};
pub use money::{Money, MoneyParseError};
