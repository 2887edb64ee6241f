//! Amount type for expenditure values
//!
//! Amounts are non-negative decimal numbers no larger than [`MAX_AMOUNT`].
//! The value is kept as an `f64` and validated on construction. The bound
//! keeps every sum and day-count product the model forms finite.

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul};

/// Message shown when an amount fails validation
pub const AMOUNT_CONSTRAINTS: &str =
    "Amount should be a non-negative number no larger than 1000000000";

/// Largest amount a single entry may carry
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// A non-negative monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting negative, non-finite or oversized values
    ///
    /// # Examples
    /// ```
    /// use saveit::models::Amount;
    /// assert!(Amount::new(12.5).is_ok());
    /// assert!(Amount::new(-1.0).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotANumber(value.to_string()));
        }
        if value < 0.0 {
            return Err(AmountError::Negative(value));
        }
        if value > MAX_AMOUNT {
            return Err(AmountError::TooLarge(value));
        }
        // Normalise -0.0 so equality and hashing agree
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parse an amount from user text
    ///
    /// Accepts formats: "12.50", "12", "$12.50"
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);

        let value: f64 = trimmed
            .parse()
            .map_err(|_| AmountError::NotANumber(s.trim().to_string()))?;

        Self::new(value)
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

// Construction rejects NaN, so the bit pattern is a sound equality witness
impl Eq for Amount {}

impl Hash for Amount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Scale by an occurrence count
impl Mul<u32> for Amount {
    type Output = Self;

    fn mul(self, times: u32) -> Self {
        Self(self.0 * f64::from(times))
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq)]
pub enum AmountError {
    NotANumber(String),
    Negative(f64),
    TooLarge(f64),
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::NotANumber(s) => write!(f, "{} (got '{}')", AMOUNT_CONSTRAINTS, s),
            AmountError::Negative(v) | AmountError::TooLarge(v) => {
                write!(f, "{} (got {})", AMOUNT_CONSTRAINTS, v)
            }
        }
    }
}

impl std::error::Error for AmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepted() {
        assert_eq!(Amount::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Amount::new(12.5).unwrap().value(), 12.5);
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(Amount::new(-0.01), Err(AmountError::Negative(-0.01)));
        assert!(Amount::parse("-3").is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Amount::new(f64::NAN).is_err());
        assert!(Amount::new(f64::INFINITY).is_err());
        assert!(Amount::parse("NaN").is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("12.50").unwrap().value(), 12.5);
        assert_eq!(Amount::parse("$4.30").unwrap().value(), 4.3);
        assert_eq!(Amount::parse(" 7 ").unwrap().value(), 7.0);
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(12.5).unwrap().to_string(), "12.50");
        assert_eq!(Amount::zero().to_string(), "0.00");
        assert_eq!(Amount::new(3.0).unwrap().format_with_symbol("$"), "$3.00");
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        assert_eq!(Amount::new(-0.0).unwrap(), Amount::zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(10.0).unwrap();
        let b = Amount::new(5.0).unwrap();
        assert_eq!((a + b).value(), 15.0);
        assert_eq!((b * 3).value(), 15.0);

        let total: Amount = vec![a, b].into_iter().sum();
        assert_eq!(total.value(), 15.0);
    }

    #[test]
    fn test_oversized_rejected() {
        assert!(Amount::new(MAX_AMOUNT).is_ok());
        assert!(matches!(
            Amount::parse("1e308"),
            Err(AmountError::TooLarge(_))
        ));
        assert!(Amount::parse("1000000000.01").is_err());
    }

    #[test]
    fn test_aggregates_of_largest_amount_stay_finite() {
        let max = Amount::new(MAX_AMOUNT).unwrap();

        let total: Amount = std::iter::repeat(max).take(10_000).sum();
        assert!(total.value().is_finite());

        let scaled = (max * u32::MAX) + (max * u32::MAX);
        assert!(scaled.value().is_finite());
    }

    #[test]
    fn test_serializes_as_number() {
        let amount = Amount::new(2.25).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "2.25");
    }
}
