//! Money type for representing currency amounts
//!
//! Internally stores amounts in centavos (i64) to avoid floating-point
//! precision issues. Provides safe arithmetic operations and formatting
//! with a configurable currency code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as hundredths of the currency unit
///
/// Using i64 subunits avoids floating-point precision issues and supports
/// amounts far beyond any personal budget (both positive and negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from subunits (e.g. centavos)
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use gastos::models::Money;
    /// let amount = Money::from_units(2000); // 2000.00
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in subunits
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the subunit portion (0-99)
    pub const fn subunits(&self) -> i64 {
        (self.0 % 100).abs()
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
        Self(self.0.abs())
    }

    /// Take a whole-number percentage of this amount
    ///
    /// Used for budget-rule allocations: `Money::from_units(2000).percent_of(70)`
    /// is 1400.00. Truncates any fractional subunit toward zero.
    pub const fn percent_of(&self, percentage: u8) -> Self {
        Self(self.0 * percentage as i64 / 100)
    }

    /// Divide evenly across `n` items, truncating toward zero
    ///
    /// Returns zero when `n` is zero rather than panicking.
    pub const fn div_count(&self, n: usize) -> Self {
        if n == 0 {
            Self(0)
        } else {
            Self(self.0 / n as i64)
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "10" (whole units)
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let cents = if let Some((units_str, frac_str)) = s.split_once('.') {
            let units: i64 = units_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            if !frac_str.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            // Pad or truncate the fraction to 2 digits
            let frac: i64 = match frac_str.len() {
                0 => 0,
                1 => {
                    frac_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => frac_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            units * 100 + frac
        } else {
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency code prefix, e.g. "PHP 2500.00"
    pub fn format_with_code(&self, code: &str) -> String {
        if self.is_negative() {
            format!("-{} {}.{:02}", code, self.units().abs(), self.subunits())
        } else {
            format!("{} {}.{:02}", code, self.units(), self.subunits())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.subunits())
        } else {
            write!(f, "{}.{:02}", self.units(), self.subunits())
        }
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

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.subunits(), 50);
    }

    #[test]
    fn test_from_units() {
        assert_eq!(Money::from_units(2000).cents(), 200_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_format_with_code() {
        assert_eq!(Money::from_cents(250_000).format_with_code("PHP"), "PHP 2500.00");
        assert_eq!(Money::from_cents(-1050).format_with_code("USD"), "-USD 10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_percent_of() {
        let budget = Money::from_units(2000);
        assert_eq!(budget.percent_of(70), Money::from_units(1400));
        assert_eq!(budget.percent_of(20), Money::from_units(400));
        assert_eq!(budget.percent_of(10), Money::from_units(200));
        assert_eq!(budget.percent_of(0), Money::zero());
    }

    #[test]
    fn test_div_count() {
        assert_eq!(Money::from_cents(1500).div_count(3).cents(), 500);
        assert_eq!(Money::from_cents(1500).div_count(0), Money::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
