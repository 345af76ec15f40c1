//! Cart

use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    items::LineItem,
    pricing::{checked_total, total_price},
    products::{Product, ProductId},
    quantity::{Quantity, QuantityError},
};

/// Errors raised by cart mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The requested quantity cannot be billed.
    #[error(transparent)]
    InvalidQuantity(#[from] QuantityError),

    /// Two stored lines share a product id.
    #[error("duplicate line for product {0}")]
    DuplicateLine(ProductId),
}

/// Cart
///
/// The ledger of line items for one visitor session. Lines are kept in insertion order and keyed
/// by product id; the total is always derived from the lines, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: SmallVec<[LineItem; 8]>,
}

impl Cart {
    /// Create a new, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from previously stored lines.
    ///
    /// # Errors
    ///
    /// - [`CartError::DuplicateLine`]: two lines share a product id.
    /// - [`CartError::InvalidQuantity`]: the lines total more than a `u64` can hold.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Result<Self, CartError> {
        let mut lines: SmallVec<[LineItem; 8]> = SmallVec::new();

        for item in items {
            if lines.iter().any(|line| line.id() == item.id()) {
                return Err(CartError::DuplicateLine(item.id().clone()));
            }

            lines.push(item);
        }

        checked_total(&lines).map_err(|_err| QuantityError::TooLarge)?;

        Ok(Self { lines })
    }

    /// Add `quantity` units of a product, returning the line's resulting quantity.
    ///
    /// If the product is already in the cart its quantity is increased and the price captured on
    /// first add is kept. Otherwise a new line is appended.
    ///
    /// # Errors
    ///
    /// - [`QuantityError::NonPositive`]: `quantity` is zero or negative.
    /// - [`QuantityError::TooLarge`]: the line quantity or cart total would overflow.
    pub fn add_item(&mut self, product: Product, quantity: i64) -> Result<Quantity, CartError> {
        let quantity = Quantity::try_from(quantity)?;
        let total = self.total();

        if let Some(line) = self.lines.iter_mut().find(|line| line.id() == &product.id) {
            let merged = line.quantity().checked_add(quantity)?;

            ensure_total_fits(total, line.unit_price(), quantity)?;
            line.set_quantity(merged);

            return Ok(merged);
        }

        ensure_total_fits(total, product.price, quantity)?;
        self.lines.push(LineItem::new(product, quantity));

        Ok(quantity)
    }

    /// Add a single unit of a product.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::TooLarge`] if the line quantity or cart total would overflow.
    pub fn add_one(&mut self, product: Product) -> Result<Quantity, CartError> {
        self.add_item(product, 1)
    }

    /// Set the absolute quantity of a line.
    ///
    /// A quantity of zero or less removes the line. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::TooLarge`] if the quantity or resulting cart total would overflow.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            self.remove_item(id);
            return Ok(());
        }

        let total = self.total();

        let Some(line) = self.lines.iter_mut().find(|line| line.id() == id) else {
            return Ok(());
        };

        let quantity = Quantity::try_from(quantity)?;

        ensure_total_fits(
            total.saturating_sub(line.subtotal()),
            line.unit_price(),
            quantity,
        )?;

        line.set_quantity(quantity);

        Ok(())
    }

    /// Remove a line, returning it if it was present.
    pub fn remove_item(&mut self, id: &ProductId) -> Option<LineItem> {
        let position = self.lines.iter().position(|line| line.id() == id)?;

        Some(self.lines.remove(position))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Calculate the total of the cart.
    pub fn total(&self) -> u64 {
        total_price(&self.lines)
    }

    /// Get the number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Get a line by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.lines.iter()
    }

    /// Get the lines in insertion order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn ensure_total_fits(total: u64, unit_price: u64, quantity: Quantity) -> Result<(), QuantityError> {
    unit_price
        .checked_mul(u64::from(quantity))
        .and_then(|added| total.checked_add(added))
        .map(|_total| ())
        .ok_or(QuantityError::TooLarge)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product(id: &str, price: u64) -> Product {
        Product::new(id, id.to_uppercase(), price)
    }

    fn id(id: &str) -> ProductId {
        ProductId::from(id)
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn add_item_appends_in_insertion_order() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("b", 50), 1)?;
        cart.add_item(product("a", 100), 2)?;

        let ids: Vec<&str> = cart.iter().map(|line| line.id().as_str()).collect();

        assert_eq!(ids, ["b", "a"]);

        Ok(())
    }

    #[test]
    fn add_item_merges_on_same_id() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("p", 10), 2)?;
        let merged = cart.add_item(product("p", 10), 3)?;

        assert_eq!(merged.get(), 5);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 50);

        Ok(())
    }

    #[test]
    fn add_item_keeps_snapshot_price_on_merge() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("p", 10), 1)?;
        cart.add_item(product("p", 99), 1)?;

        let line = cart.get(&id("p")).ok_or("expected line for p")?;

        assert_eq!(line.unit_price(), 10);
        assert_eq!(cart.total(), 20);

        Ok(())
    }

    #[test]
    fn add_item_rejects_non_positive_quantity() {
        let mut cart = Cart::new();

        assert_eq!(
            cart.add_item(product("p", 10), 0),
            Err(CartError::InvalidQuantity(QuantityError::NonPositive(0)))
        );
        assert_eq!(
            cart.add_item(product("p", 10), -3),
            Err(CartError::InvalidQuantity(QuantityError::NonPositive(-3)))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn add_item_rejects_total_overflow_without_mutating() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("a", u64::MAX - 1), 1)?;

        let before = cart.clone();

        assert_eq!(
            cart.add_item(product("b", 2), 1),
            Err(CartError::InvalidQuantity(QuantityError::TooLarge))
        );
        assert_eq!(
            cart.add_item(product("a", 0), 1),
            Err(CartError::InvalidQuantity(QuantityError::TooLarge))
        );
        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn add_one_adds_single_unit() -> TestResult {
        let mut cart = Cart::new();

        cart.add_one(product("p", 7))?;
        cart.add_one(product("p", 7))?;

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), 14);

        Ok(())
    }

    #[test]
    fn set_quantity_replaces_quantity() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("p", 10), 2)?;
        cart.set_quantity(&id("p"), 7)?;

        assert_eq!(cart.item_count(), 7);
        assert_eq!(cart.total(), 70);

        Ok(())
    }

    #[test]
    fn set_quantity_zero_or_negative_removes_line() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("a", 10), 2)?;
        cart.add_item(product("b", 10), 2)?;

        cart.set_quantity(&id("a"), 0)?;
        cart.set_quantity(&id("b"), -4)?;

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn set_quantity_unknown_id_is_noop() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("a", 10), 1)?;

        let before = cart.clone();

        cart.set_quantity(&id("missing"), 3)?;
        cart.set_quantity(&id("missing"), 0)?;
        cart.set_quantity(&id("missing"), i64::MAX)?;

        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn set_quantity_rejects_overflow() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("a", u64::MAX / 2), 1)?;

        assert_eq!(
            cart.set_quantity(&id("a"), 3),
            Err(CartError::InvalidQuantity(QuantityError::TooLarge))
        );
        assert_eq!(
            cart.set_quantity(&id("a"), i64::from(u32::MAX) + 1),
            Err(CartError::InvalidQuantity(QuantityError::TooLarge))
        );
        assert_eq!(cart.item_count(), 1);

        Ok(())
    }

    #[test]
    fn remove_item_returns_removed_line() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("a", 10), 1)?;

        let removed = cart.remove_item(&id("a")).ok_or("expected removed line")?;

        assert_eq!(removed.id().as_str(), "a");
        assert!(cart.remove_item(&id("a")).is_none());
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn clear_empties_cart() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("a", 10), 1)?;
        cart.add_item(product("b", 10), 1)?;
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);

        Ok(())
    }

    #[test]
    fn add_set_clear_scenario() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("a", 100), 2)?;
        assert_eq!(cart.total(), 200);

        cart.add_item(product("b", 50), 1)?;
        assert_eq!(cart.total(), 250);

        cart.set_quantity(&id("a"), 0)?;
        assert_eq!(cart.total(), 50);
        assert_eq!(cart.len(), 1);
        assert!(cart.get(&id("b")).is_some());

        cart.clear();
        assert_eq!(cart.total(), 0);
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn zero_price_line_counts_items_but_not_total() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(product("a", 100), 2)?;
        cart.add_item(product("b", 50), 1)?;
        cart.add_item(product("c", 0), 5)?;

        assert_eq!(cart.total(), 250);
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.item_count(), 8);

        Ok(())
    }

    #[test]
    fn from_items_rejects_duplicates() {
        let items = [
            LineItem::new(product("a", 1), Quantity::ONE),
            LineItem::new(product("a", 2), Quantity::ONE),
        ];

        assert_eq!(
            Cart::from_items(items),
            Err(CartError::DuplicateLine(id("a")))
        );
    }

    #[test]
    fn from_items_preserves_order() -> TestResult {
        let items = [
            LineItem::new(product("b", 1), Quantity::ONE),
            LineItem::new(product("a", 2), Quantity::try_from(2_i64)?),
        ];

        let cart = Cart::from_items(items.clone())?;

        assert_eq!(cart.lines(), &items);
        assert_eq!(cart.total(), 5);

        Ok(())
    }

    #[test]
    fn from_items_rejects_overflowing_total() {
        let items = [
            LineItem::new(product("a", u64::MAX), Quantity::ONE),
            LineItem::new(product("b", 1), Quantity::ONE),
        ];

        assert_eq!(
            Cart::from_items(items),
            Err(CartError::InvalidQuantity(QuantityError::TooLarge))
        );
    }
}
