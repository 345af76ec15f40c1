//! Products

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Opaque product identifier, used as the cart's merge key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Product
///
/// A catalog entry as seen at the moment it is added to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product price in whole currency units
    pub price: u64,

    /// Product image reference
    pub image: Option<String>,
}

impl Product {
    /// Creates a product without an image.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
        }
    }

    /// Sets the product image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_has_no_image() {
        let product = Product::new("tee", "T-Shirt", 25);

        assert_eq!(product.id.as_str(), "tee");
        assert_eq!(product.name, "T-Shirt");
        assert_eq!(product.price, 25);
        assert!(product.image.is_none());
    }

    #[test]
    fn with_image_sets_reference() {
        let product = Product::new("tee", "T-Shirt", 25).with_image("/img/tee.png");

        assert_eq!(product.image.as_deref(), Some("/img/tee.png"));
    }

    #[test]
    fn product_id_displays_raw_value() {
        assert_eq!(ProductId::from("sku-1").to_string(), "sku-1");
    }
}
