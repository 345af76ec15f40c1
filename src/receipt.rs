//! Receipt
//!
//! Renders a cart for terminal surfaces. Amounts stay raw in the ledger and are only turned into
//! money here, at the edge.

use std::io;

use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    pricing::{PricingError, to_money},
};

/// Errors that can occur when rendering a cart.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// An amount could not be formatted as money.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// IO error
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Write the cart as a table followed by the item count and total.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if an amount cannot be formatted or the output cannot be written.
pub fn write_receipt(
    mut out: impl io::Write,
    cart: &Cart,
    currency: &Currency,
) -> Result<(), ReceiptError> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Item", "Unit Price", "Qty", "Line Total"]);

    for line in cart.iter() {
        builder.push_record([
            line.name().to_string(),
            to_money(line.unit_price(), currency)?.to_string(),
            line.quantity().to_string(),
            to_money(line.subtotal(), currency)?.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..4), Alignment::right());
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "{table}")?;
    writeln!(out, " Items: {}", cart.item_count())?;
    writeln!(out, " Total: {}", to_money(cart.total(), currency)?)?;

    Ok(())
}
