//! Formatting helpers for terminal output

use std::fmt::Write;

use chrono::{Duration, NaiveDate};

use crate::models::{Category, Money};

/// Format an amount with a currency symbol and Indian digit grouping
///
/// ```
/// use spendview::display::format_currency;
/// use spendview::models::Money;
/// assert_eq!(format_currency(Money::from_cents(12345678), "₹"), "₹1,23,456.78");
/// ```
pub fn format_currency(amount: Money, symbol: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let cents = amount.cents().unsigned_abs();
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_indian(cents / 100),
        cents % 100
    )
}

/// Lakh/crore grouping: the last three digits, then pairs
fn group_indian(units: u64) -> String {
    let digits = units.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (mut rest, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while rest.len() > 2 {
        let (head, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = head;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// "Today", "Yesterday", or the date in `date_format`
///
/// An unusable format string falls back to ISO dates.
pub fn format_relative_date(date: NaiveDate, today: NaiveDate, date_format: &str) -> String {
    if date == today {
        return "Today".to_string();
    }
    if today - Duration::days(1) == date {
        return "Yesterday".to_string();
    }

    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Category name with a leading capital, e.g. "Food"
pub fn category_label(category: &Category) -> String {
    let mut chars = category.name().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar for a fraction in 0.0..=1.0
pub fn format_bar(fraction: f64, width: usize) -> String {
    if fraction <= 0.0 || fraction.is_nan() {
        return "░".repeat(width);
    }

    let filled = ((fraction.min(1.0)) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
