//! Cart sessions
//!
//! A [`CartSession`] is the explicit per-visitor object UI surfaces hold instead of reaching for
//! shared global state. It owns the [`Cart`] and a [`CartStore`], saves a complete snapshot after
//! every mutation, and runs the checkout hand-over.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    cart::{Cart, CartError},
    checkout::{CheckoutNavigator, CheckoutOutcome, NavigationError},
    products::{Product, ProductId},
    quantity::Quantity,
    store::{CartSnapshot, CartStore, StoreError},
};

/// Errors raised by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The cart rejected the mutation; nothing changed and nothing was saved.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The mutation was applied in memory but the snapshot could not be saved.
    #[error("cart updated but not saved: {0}")]
    Persist(#[from] StoreError),

    /// Checkout navigation failed; the cart was left untouched.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The order was placed and the cart cleared in memory, but the empty cart could not be saved.
    #[error("order placed but the emptied cart was not saved: {source}")]
    CheckoutNotSaved {
        /// The completed checkout.
        outcome: CheckoutOutcome,

        /// Why the save failed.
        source: StoreError,
    },
}

/// One visitor's cart and the store it is persisted to.
#[derive(Debug)]
pub struct CartSession<S> {
    cart: Cart,
    store: S,
}

impl<S: CartStore> CartSession<S> {
    /// Open a session, restoring the cart from `store`.
    ///
    /// A missing, unreadable or invalid snapshot starts the session with an empty cart.
    pub fn open(store: S) -> Self {
        let cart = match store.load() {
            Ok(Some(snapshot)) => snapshot.into_cart().unwrap_or_else(|error| {
                warn!(%error, "discarding invalid cart snapshot");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(error) => {
                warn!(%error, "cart store unavailable, starting with an empty cart");
                Cart::new()
            }
        };

        debug!(
            lines = cart.len(),
            total = cart.total(),
            "opened cart session"
        );

        Self { cart, store }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Close the session, returning the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Add units of a product and save.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Cart`]: the quantity was rejected.
    /// - [`SessionError::Persist`]: the cart changed but could not be saved.
    pub fn add_item(&mut self, product: Product, quantity: i64) -> Result<Quantity, SessionError> {
        let product_id = product.id.clone();
        let line_quantity = self.cart.add_item(product, quantity)?;

        debug!(%product_id, quantity, %line_quantity, "added item to cart");

        self.persist()?;

        Ok(line_quantity)
    }

    /// Set the quantity of a line and save. Zero or less removes the line.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Cart`]: the quantity was rejected.
    /// - [`SessionError::Persist`]: the cart changed but could not be saved.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), SessionError> {
        self.cart.set_quantity(id, quantity)?;

        debug!(product_id = %id, quantity, "set cart item quantity");

        self.persist()
    }

    /// Remove a line and save.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Persist`] if the cart could not be saved.
    pub fn remove_item(&mut self, id: &ProductId) -> Result<(), SessionError> {
        let removed = self.cart.remove_item(id).is_some();

        debug!(product_id = %id, removed, "removed item from cart");

        self.persist()
    }

    /// Empty the cart and save.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Persist`] if the cart could not be saved.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.cart.clear();

        debug!("cleared cart");

        self.persist()
    }

    /// Hand the cart over to checkout.
    ///
    /// An empty cart returns [`CheckoutOutcome::EmptyCart`] without invoking the navigator. The
    /// cart is cleared and saved only after the navigator succeeds.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Navigation`]: the navigator failed; the cart is unchanged.
    /// - [`SessionError::CheckoutNotSaved`]: the order was confirmed and the cart cleared in
    ///   memory, but the empty cart could not be saved. The completed outcome is carried along.
    pub fn checkout(
        &mut self,
        navigator: &mut impl CheckoutNavigator,
    ) -> Result<CheckoutOutcome, SessionError> {
        if self.cart.is_empty() {
            debug!("checkout skipped for empty cart");

            return Ok(CheckoutOutcome::EmptyCart);
        }

        let total = self.cart.total();
        let item_count = self.cart.item_count();

        if let Err(error) = navigator.navigate() {
            warn!(%error, total, item_count, "checkout navigation failed, keeping cart");

            return Err(error.into());
        }

        info!(total, item_count, "checkout completed");

        let outcome = CheckoutOutcome::Completed { total, item_count };

        self.cart.clear();
        self.save_snapshot()
            .map_err(|source| SessionError::CheckoutNotSaved { outcome, source })?;

        Ok(outcome)
    }

    fn persist(&mut self) -> Result<(), SessionError> {
        self.save_snapshot().map_err(SessionError::Persist)
    }

    fn save_snapshot(&mut self) -> Result<(), StoreError> {
        let snapshot = CartSnapshot::from(&self.cart);

        self.store.save(&snapshot).inspect_err(|error| {
            warn!(%error, "failed to save cart snapshot");
        })
    }
}
