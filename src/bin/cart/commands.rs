//! Cart CLI commands

use std::io::{self, Write};

use clap::{Args, Subcommand};
use rusty_money::iso::Currency;
use tracing::info;

use cart_ledger::prelude::*;

use crate::config::CartConfig;

/// Cart operation to run.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Add a product to the cart
    Add(AddArgs),

    /// Set the quantity of a line; zero or less removes it
    Set {
        /// Product id
        id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: String,
    },

    /// Remove a line from the cart
    Remove {
        /// Product id
        id: String,
    },

    /// Empty the cart
    Clear,

    /// Show the cart
    Show,

    /// Place the order and empty the cart
    Checkout,
}

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Product id
    #[arg(long)]
    pub id: String,

    /// Product display name
    #[arg(long)]
    pub name: String,

    /// Unit price in whole currency units
    #[arg(long)]
    pub price: u64,

    /// Product image reference
    #[arg(long)]
    pub image: Option<String>,

    /// Number of units to add
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub quantity: String,
}

/// Writes an order confirmation to the terminal.
struct ConfirmationNavigator<W> {
    out: W,
}

impl<W: Write> CheckoutNavigator for ConfirmationNavigator<W> {
    fn navigate(&mut self) -> Result<(), NavigationError> {
        writeln!(self.out, "Order confirmed.")
            .map_err(|error| NavigationError::new(format!("could not confirm order: {error}")))
    }
}

pub(crate) fn run(config: CartConfig) -> Result<(), String> {
    execute(config, &mut io::stdout().lock())
}

fn execute<W: Write>(config: CartConfig, out: &mut W) -> Result<(), String> {
    let currency = find_currency(&config.store.currency).map_err(|error| error.to_string())?;
    let store = YamlFileStore::new(config.store.path);

    info!(path = %store.path().display(), "opening cart");

    let mut session = CartSession::open(store);

    match config.command {
        Command::Add(args) => {
            let quantity = parse_quantity(&args.quantity)?;
            let mut product = Product::new(args.id, args.name, args.price);
            product.image = args.image;

            session
                .add_item(product, quantity)
                .map_err(|error| format!("failed to add item: {error}"))?;
        }
        Command::Set { id, quantity } => {
            let quantity = parse_quantity(&quantity)?;

            session
                .set_quantity(&ProductId::from(id), quantity)
                .map_err(|error| format!("failed to set quantity: {error}"))?;
        }
        Command::Remove { id } => session
            .remove_item(&ProductId::from(id))
            .map_err(|error| format!("failed to remove item: {error}"))?,
        Command::Clear => session
            .clear()
            .map_err(|error| format!("failed to clear cart: {error}"))?,
        Command::Show => {}
        Command::Checkout => {
            let mut navigator = ConfirmationNavigator { out: &mut *out };

            return match session.checkout(&mut navigator) {
                Ok(CheckoutOutcome::EmptyCart) => {
                    Err("checkout is unavailable while the cart is empty".to_string())
                }
                Ok(outcome) => write_payment(out, outcome, currency),
                Err(SessionError::CheckoutNotSaved { outcome, source }) => {
                    write_payment(out, outcome, currency)?;

                    Err(format!("order placed, but the emptied cart was not saved: {source}"))
                }
                Err(error) => Err(format!("checkout failed: {error}")),
            };
        }
    }

    write_receipt(out, session.cart(), currency).map_err(|error| error.to_string())
}

fn write_payment(
    out: &mut impl Write,
    outcome: CheckoutOutcome,
    currency: &Currency,
) -> Result<(), String> {
    let CheckoutOutcome::Completed { total, item_count } = outcome else {
        return Ok(());
    };

    let total = to_money(total, currency).map_err(|error| error.to_string())?;

    writeln!(out, "Paid {total} for {item_count} item(s).").map_err(|error| error.to_string())
}

fn parse_quantity(text: &str) -> Result<i64, String> {
    parse_requested_quantity(text).map_err(|error| format!("invalid quantity: {error}"))
}
