//! Pricing

use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

use crate::items::LineItem;

/// Errors that can occur while totalling or formatting amounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The total of the given lines does not fit in a `u64`.
    #[error("total exceeds the supported maximum")]
    Overflow,

    /// The amount is too large to be represented as money.
    #[error("amount {0} cannot be represented as money")]
    Unrepresentable(u64),

    /// Unknown currency code
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Calculates the total price of a list of lines, failing on overflow.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if any line subtotal or the running total overflows.
pub fn checked_total<'a>(
    items: impl IntoIterator<Item = &'a LineItem>,
) -> Result<u64, PricingError> {
    items.into_iter().try_fold(0_u64, |acc, item| {
        item.checked_subtotal()
            .and_then(|subtotal| acc.checked_add(subtotal))
            .ok_or(PricingError::Overflow)
    })
}

/// Calculates the total price of a list of lines.
///
/// An empty list totals zero.
pub fn total_price(items: &[LineItem]) -> u64 {
    items
        .iter()
        .fold(0_u64, |acc, item| acc.saturating_add(item.subtotal()))
}

/// Converts a whole-unit amount into money in the given currency for display.
///
/// # Errors
///
/// Returns [`PricingError::Unrepresentable`] if the amount exceeds `i64::MAX`.
pub fn to_money(amount: u64, currency: &Currency) -> Result<Money<'_, Currency>, PricingError> {
    let major = i64::try_from(amount).map_err(|_err| PricingError::Unrepresentable(amount))?;

    Ok(Money::from_major(major, currency))
}

/// Looks up a supported currency by ISO code.
///
/// # Errors
///
/// Returns [`PricingError::UnknownCurrency`] for codes the storefront does not sell in.
pub fn find_currency(code: &str) -> Result<&'static Currency, PricingError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "GBP" => Ok(iso::GBP),
        "USD" => Ok(iso::USD),
        "EUR" => Ok(iso::EUR),
        _ => Err(PricingError::UnknownCurrency(code.to_string())),
    }
}
