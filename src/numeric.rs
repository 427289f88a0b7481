//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Construction is deliberately unchecked: the cart accepts whatever values
//! the caller supplies, including negative prices, which propagate into
//! totals unmodified.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use thiserror::Error;

/// Error returned when a price literal cannot be parsed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParsePriceError {
    #[error("Invalid price literal: {0}")]
    Invalid(String),
}

/// A unit price expressed as a fixed-point decimal
///
/// Negative values are representable and are not rejected; callers that
/// supply them get them back in line totals unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a raw decimal, unchecked
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// The zero price
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create a price from a whole number of currency units
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parse a price from a decimal literal like "2.00"
    pub fn from_str(s: &str) -> Result<Self, ParsePriceError> {
        Decimal::from_str_exact(s)
            .map(Self)
            .map_err(|_| ParsePriceError::Invalid(s.to_string()))
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check whether the price is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

/// Price × Quantity yields a line total
impl Mul<Quantity> for Price {
    type Output = Price;

    fn mul(self, rhs: Quantity) -> Price {
        Price(self.0 * Decimal::from(rhs.get()))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::zero(), Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A count of units for a single line entry
///
/// Unsigned by construction, so a negative quantity is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Create a quantity from a unit count
    pub fn new(units: u32) -> Self {
        Self(units)
    }

    /// The zero quantity
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get the unit count
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Check whether the quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
