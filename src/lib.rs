//! Cart Ledger
//!
//! Cart Ledger is the pricing and quantity model behind a storefront cart: line items keyed by
//! product, snapshot prices, derived totals, and the collaborators that persist a cart and hand it
//! over to checkout.

pub mod cart;
pub mod checkout;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod quantity;
pub mod receipt;
pub mod session;
pub mod store;
