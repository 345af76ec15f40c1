//! Quantities

use std::{fmt, num::NonZeroU32, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a quantity cannot be billed as given.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantityError {
    /// The quantity was zero or negative where a positive quantity is required.
    #[error("quantity must be greater than zero, got {0}")]
    NonPositive(i64),

    /// The quantity had a fractional part.
    #[error("quantity must be a whole number, got {0}")]
    Fractional(String),

    /// The quantity could not be read as a number.
    #[error("quantity is not a number: {0:?}")]
    Malformed(String),

    /// The quantity, or the cart total it would produce, is too large to represent.
    #[error("quantity exceeds the supported maximum")]
    TooLarge,
}

/// A positive, whole number of units of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// Creates a quantity, returning `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Returns the number of units.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Adds two quantities.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::TooLarge`] if the sum does not fit.
    pub fn checked_add(self, other: Quantity) -> Result<Quantity, QuantityError> {
        self.0
            .checked_add(other.get())
            .map(Self)
            .ok_or(QuantityError::TooLarge)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for u64 {
    fn from(quantity: Quantity) -> Self {
        u64::from(quantity.get())
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(QuantityError::NonPositive(value));
        }

        let units = u32::try_from(value).map_err(|_err| QuantityError::TooLarge)?;

        Quantity::new(units).ok_or(QuantityError::NonPositive(value))
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::try_from(parse_requested_quantity(s)?)
    }
}

/// Parses quantity text from an untrusted boundary into a whole number.
///
/// Zero and negative values are accepted here because they are meaningful to
/// [`Cart::set_quantity`](crate::cart::Cart::set_quantity), where they remove the line.
/// Fractional values are rejected rather than rounded, so a typo never changes what is billed.
///
/// # Errors
///
/// - [`QuantityError::Malformed`]: the text is not a number.
/// - [`QuantityError::Fractional`]: the number has a fractional part.
/// - [`QuantityError::TooLarge`]: the number does not fit in an `i64`.
pub fn parse_requested_quantity(s: &str) -> Result<i64, QuantityError> {
    let trimmed = s.trim();

    let value = trimmed
        .parse::<Decimal>()
        .map_err(|_err| QuantityError::Malformed(s.to_string()))?;

    if !value.fract().is_zero() {
        return Err(QuantityError::Fractional(trimmed.to_string()));
    }

    value.to_i64().ok_or(QuantityError::TooLarge)
}
