//! Cart Ledger prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    checkout::{CheckoutNavigator, CheckoutOutcome, NavigationError},
    items::LineItem,
    pricing::{PricingError, find_currency, to_money},
    products::{Product, ProductId},
    quantity::{Quantity, QuantityError, parse_requested_quantity},
    receipt::{ReceiptError, write_receipt},
    session::{CartSession, SessionError},
    store::{CartSnapshot, CartStore, MemoryStore, StoreError, YamlFileStore},
};
