//! Expense model
//!
//! Mirrors the record shape served by the expenses API. Optional fields are
//! explicit: a missing description is `None` (an empty string is read as
//! `None` too), missing or `null` tags are an empty list.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
    NetBanking,
    /// Also used for values the backend adds later
    Other,
}

impl PaymentMethod {
    /// The wire name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Upi => "upi",
            Self::NetBanking => "netbanking",
            Self::Other => "other",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Card",
            Self::Upi => "UPI",
            Self::NetBanking => "Net Banking",
            Self::Other => "Other",
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(name: String) -> Self {
        match name.trim().to_lowercase().as_str() {
            "cash" => Self::Cash,
            "card" => Self::Card,
            "upi" => Self::Upi,
            "netbanking" | "net banking" => Self::NetBanking,
            _ => Self::Other,
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.name().to_string()
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Opaque identifier assigned by the backend
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Amount spent (never negative for valid records)
    pub amount: Money,

    pub category: Category,

    #[serde(
        default,
        deserialize_with = "deserialize_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Calendar date; time of day is dropped
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,

    #[serde(
        default,
        deserialize_with = "deserialize_tags",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

impl Expense {
    /// Create an expense with the required fields
    pub fn new(id: impl Into<String>, amount: Money, category: Category, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            amount,
            category,
            description: None,
            date,
            tags: Vec::new(),
            payment_method: None,
        }
    }

    /// Set the description (empty text clears it)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the payment method
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    /// Short text used when the expense must be named in one line
    pub fn title(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.category.name())
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.id.trim().is_empty() {
            return Err(ExpenseValidationError::MissingId);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

/// Parse a record date
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp; timestamps are reduced to
/// their UTC calendar date.
pub fn parse_expense_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc().date())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_expense_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid expense date: {}", raw)))
}

fn deserialize_description<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_empty))
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingId,
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "expense has no identifier"),
            Self::NegativeAmount(amount) => {
                write!(f, "amount must not be negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
