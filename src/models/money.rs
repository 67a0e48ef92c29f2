//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so group totals add up exactly.
//! On the wire an amount is the backend's decimal number (`45.5`), which is
//! rounded to whole cents when read.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// Largest magnitude a single amount may have, in cents
///
/// Keeps totals over any realistic number of records inside `i64`.
pub const MAX_CENTS: i64 = 1_000_000_000_000_000;

/// Symbols `Money::parse` strips before the digits
const CURRENCY_SYMBOLS: [&str; 4] = ["₹", "Rs.", "Rs", "$"];

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendview::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_decimal_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a decimal value, rounding to whole cents
    ///
    /// Returns `None` for non-finite values and anything beyond [`MAX_CENTS`].
    pub fn from_decimal(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > MAX_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a floating point value
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Plain two-decimal form, e.g. `"45.00"`
    ///
    /// This is the string free-text search matches against.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "10.5", "10", "₹10.50", "-₹10.50", "₹-10.50",
    /// "1,250.00". Anything else, or an amount beyond [`MAX_CENTS`], is
    /// `InvalidFormat`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let mut rest = s.trim();
        let mut negative = false;
        if let Some(stripped) = rest.strip_prefix('-') {
            negative = true;
            rest = stripped.trim_start();
        }
        if let Some(symbol) = CURRENCY_SYMBOLS.iter().find(|sym| rest.starts_with(*sym)) {
            rest = rest[symbol.len()..].trim_start();
        }
        if !negative {
            if let Some(stripped) = rest.strip_prefix('-') {
                negative = true;
                rest = stripped;
            }
        }

        let (units_str, cents_str) = rest.split_once('.').unwrap_or((rest, ""));
        let units_digits: String = units_str.chars().filter(|c| *c != ',').collect();

        let all_digits = |text: &str| text.bytes().all(|b| b.is_ascii_digit());
        if (units_digits.is_empty() && cents_str.is_empty())
            || !all_digits(&units_digits)
            || !all_digits(cents_str)
            || units_str.starts_with(',')
        {
            return Err(invalid());
        }

        let units: i64 = if units_digits.is_empty() {
            0
        } else {
            units_digits.parse().map_err(|_| invalid())?
        };

        // Pad or truncate cents to 2 digits
        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => cents_str[..2].parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .filter(|c| *c <= MAX_CENTS)
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_decimal(value).ok_or_else(|| {
            serde::de::Error::custom(format!("amount out of range: {}", value))
        })
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
