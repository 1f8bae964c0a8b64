use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Product, ProductId};
use crate::money::Money;

/// One product's entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: Money,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.to_string(),
            price: product.price,
            image: product.image.to_string(),
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// Direction of a quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Increase,
    Decrease,
}

/// What a quantity adjustment did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOutcome {
    Changed { quantity: u32 },
    /// Decrease at quantity 1 dropped the line.
    Removed,
    NotInCart,
}

/// A restored line list that breaks cart invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCart {
    #[error("line for product {0} has quantity 0")]
    ZeroQuantity(ProductId),
    #[error("product {0} appears on more than one line")]
    DuplicateLine(ProductId),
}

/// Ordered cart lines, at most one per product, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from persisted lines, checking its invariants.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self, InvalidCart> {
        for (index, line) in lines.iter().enumerate() {
            if line.quantity == 0 {
                return Err(InvalidCart::ZeroQuantity(line.id));
            }
            if lines[..index].iter().any(|earlier| earlier.id == line.id) {
                return Err(InvalidCart::DuplicateLine(line.id));
            }
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add one unit of `product`, returning the resulting quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        match self.lines.iter_mut().find(|line| line.id == product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                1
            }
        }
    }

    pub fn change_quantity(&mut self, id: ProductId, change: QuantityChange) -> QuantityOutcome {
        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            return QuantityOutcome::NotInCart;
        };
        match change {
            QuantityChange::Increase => {
                line.quantity = line.quantity.saturating_add(1);
                QuantityOutcome::Changed {
                    quantity: line.quantity,
                }
            }
            QuantityChange::Decrease if line.quantity > 1 => {
                line.quantity -= 1;
                QuantityOutcome::Changed {
                    quantity: line.quantity,
                }
            }
            QuantityChange::Decrease => {
                self.remove(id);
                QuantityOutcome::Removed
            }
        }
    }

    /// Drop the line for `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    /// Empty the cart. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_lines = !self.lines.is_empty();
        self.lines.clear();
        had_lines
    }

    /// Σ price × quantity over the current lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Σ quantity over the current lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: u32) -> &'static Product {
        Catalog::builtin().find(ProductId(id)).unwrap()
    }

    #[test]
    fn add_appends_then_increments() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(product(1)), 1);
        assert_eq!(cart.add(product(2)), 1);
        assert_eq!(cart.add(product(1)), 2);

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Money::from_cents(39997));
    }

    #[test]
    fn decrease_at_one_removes_line() {
        let mut cart = Cart::new();
        cart.add(product(3));
        assert_eq!(
            cart.change_quantity(ProductId(3), QuantityChange::Decrease),
            QuantityOutcome::Removed
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn quantity_change_on_missing_line_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(1));
        let before = cart.clone();
        assert_eq!(
            cart.change_quantity(ProductId(9), QuantityChange::Increase),
            QuantityOutcome::NotInCart
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(product(1));
        assert!(cart.remove(ProductId(1)));
        assert!(!cart.remove(ProductId(1)));
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total(), Money::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn from_lines_rejects_broken_invariants() {
        let mut line = CartLine::from_product(product(1));
        line.quantity = 0;
        assert_eq!(
            Cart::from_lines(vec![line]),
            Err(InvalidCart::ZeroQuantity(ProductId(1)))
        );

        let line = CartLine::from_product(product(2));
        assert_eq!(
            Cart::from_lines(vec![line.clone(), line]),
            Err(InvalidCart::DuplicateLine(ProductId(2)))
        );
    }
}
