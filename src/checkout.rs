//! Checkout

use thiserror::Error;

/// The navigation collaborator could not hand the cart over to checkout.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("checkout navigation failed: {reason}")]
pub struct NavigationError {
    reason: String,
}

impl NavigationError {
    /// Create a navigation error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason navigation failed.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Moves the visitor from the cart to order confirmation.
///
/// The navigator receives no cart data; it reads whatever it needs from its own view of the
/// session. The cart is only cleared after `navigate` succeeds.
#[cfg_attr(test, mockall::automock)]
pub trait CheckoutNavigator {
    /// Confirm the order.
    ///
    /// # Errors
    ///
    /// Returns a [`NavigationError`] if the order could not be confirmed.
    fn navigate(&mut self) -> Result<(), NavigationError>;
}

/// Result of a checkout attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was empty, so the navigator was not invoked.
    EmptyCart,

    /// The navigator confirmed the order and the cart was cleared.
    Completed {
        /// Cart total at the moment of checkout
        total: u64,

        /// Units across all lines at the moment of checkout
        item_count: u64,
    },
}
