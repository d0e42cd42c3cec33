//! Money type for representing currency amounts
//!
//! Amounts are whole currency units held in an i64. There is no fractional
//! subdivision, so every sum is exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::LedgerError;

/// A monetary amount in whole currency units
///
/// Negative values only arise from arithmetic (balances); recorded
/// transaction amounts are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single transaction may carry (one quadrillion minus one)
    pub const MAX_AMOUNT: Money = Money(999_999_999_999_999);

    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use gagyebu::models::Money;
    /// let amount = Money::new(10_000);
    /// assert_eq!(amount.to_string(), "10,000");
    /// ```
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Convert a loosely typed number (form input, foreign JSON) into Money
    ///
    /// Rejects NaN, infinities and anything with a fractional part.
    pub fn try_from_f64(value: f64) -> Result<Self, LedgerError> {
        if !value.is_finite() {
            return Err(LedgerError::InvalidAmount(format!(
                "{} is not a finite number",
                value
            )));
        }
        if value.fract() != 0.0 {
            return Err(LedgerError::InvalidAmount(format!(
                "{} is not a whole amount",
                value
            )));
        }
        if value.abs() > i64::MAX as f64 {
            return Err(LedgerError::InvalidAmount(format!("{} is too large", value)));
        }
        Ok(Self(value as i64))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10000", "10,000", "10,000원", "-5000"
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest.trim_end_matches('원').trim_end();
        let digits: String = rest.chars().filter(|c| *c != ',').collect();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(LedgerError::InvalidAmount(format!(
                "'{}' is not a whole amount",
                trimmed
            )));
        }

        let units: i64 = digits
            .parse()
            .map_err(|_| LedgerError::InvalidAmount(format!("'{}' is too large", trimmed)))?;

        Ok(Self(if negative { -units } else { units }))
    }

    /// Check that this is usable as a transaction amount: 0..=MAX_AMOUNT
    pub fn check_amount(&self) -> Result<(), LedgerError> {
        if self.is_negative() {
            return Err(LedgerError::InvalidAmount(format!(
                "amount must not be negative (got {})",
                self
            )));
        }
        if *self > Self::MAX_AMOUNT {
            return Err(LedgerError::InvalidAmount(format!(
                "amount must not exceed {} (got {})",
                Self::MAX_AMOUNT,
                self
            )));
        }
        Ok(())
    }

    /// Format with a trailing currency unit, e.g. `12,345원`
    pub fn format_with_unit(&self, unit: &str) -> String {
        format!("{}{}", self, unit)
    }
}

/// Insert thousands separators into the decimal form of `value`
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group_thousands(self.0))
    }
}

// Arithmetic saturates at the i64 bounds instead of wrapping or panicking

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
