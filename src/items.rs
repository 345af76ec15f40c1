//! Items

use serde::{Deserialize, Serialize};

use crate::{
    products::{Product, ProductId},
    quantity::Quantity,
};

/// A cart line: one product, its snapshot price and how many units are wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    id: ProductId,
    name: String,
    unit_price: u64,
    quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl LineItem {
    /// Creates a line from a product, capturing its current price.
    pub fn new(product: Product, quantity: Quantity) -> Self {
        Self {
            id: product.id,
            name: product.name,
            unit_price: product.price,
            quantity,
            image: product.image,
        }
    }

    /// Returns the product identifier
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price captured when the line was created
    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Returns the quantity
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the image reference, if any
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns `unit_price * quantity`, or `None` if it does not fit in a `u64`.
    pub fn checked_subtotal(&self) -> Option<u64> {
        self.unit_price.checked_mul(u64::from(self.quantity))
    }

    /// Returns `unit_price * quantity`.
    ///
    /// Lines held by a [`Cart`](crate::cart::Cart) always fit, so this only saturates for
    /// lines built outside one.
    pub fn subtotal(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }

    pub(crate) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}
