//! Pure projections from catalog and cart to what gets drawn.
//!
//! Nothing here keeps state between frames; every draw projects the
//! current cart again.

use crate::cart::Cart;
use crate::catalog::{Catalog, ProductId};

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";
pub const RECEIPT_HEADLINE: &str = "Thank you for your purchase!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: ProductId,
    /// 1-based position, also the keyboard shortcut.
    pub position: usize,
    pub title: &'static str,
    pub price_label: String,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price_label: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanelView {
    pub rows: Vec<CartRowView>,
    /// Set instead of rows when the cart is empty.
    pub empty_message: Option<&'static str>,
    pub checkout_enabled: bool,
    pub item_count: u32,
    pub total_label: String,
}

pub fn project_catalog(catalog: &Catalog, currency: &str) -> Vec<ProductCardView> {
    catalog
        .products()
        .iter()
        .enumerate()
        .map(|(index, product)| ProductCardView {
            id: product.id,
            position: index + 1,
            title: product.title,
            price_label: product.price.label(currency),
            image: product.image,
        })
        .collect()
}

pub fn project_cart(cart: &Cart, currency: &str) -> CartPanelView {
    let rows: Vec<CartRowView> = cart
        .lines()
        .iter()
        .map(|line| CartRowView {
            id: line.id,
            title: line.title.clone(),
            image: line.image.clone(),
            price_label: line.price.label(currency),
            quantity: line.quantity,
        })
        .collect();
    let empty = rows.is_empty();

    CartPanelView {
        rows,
        empty_message: empty.then_some(EMPTY_CART_MESSAGE),
        checkout_enabled: !empty,
        item_count: cart.item_count(),
        total_label: cart.total().label(currency),
    }
}

pub fn added_message(title: &str) -> String {
    format!("{title} added to cart!")
}

/// Last path segment of an image reference.
pub fn image_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn empty_cart_projects_message_and_disabled_checkout() {
        let view = project_cart(&Cart::new(), "$");
        assert!(view.rows.is_empty());
        assert_eq!(view.empty_message, Some(EMPTY_CART_MESSAGE));
        assert!(!view.checkout_enabled);
        assert_eq!(view.item_count, 0);
        assert_eq!(view.total_label, "$0.00");
    }

    #[test]
    fn cart_rows_follow_line_order() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.add(catalog.find(ProductId(2)).unwrap());
        cart.add(catalog.find(ProductId(1)).unwrap());
        cart.add(catalog.find(ProductId(1)).unwrap());

        let view = project_cart(&cart, "$");
        let ids: Vec<u32> = view.rows.iter().map(|row| row.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(view.rows[1].quantity, 2);
        assert_eq!(view.rows[0].price_label, "$199.99");
        assert_eq!(view.total_label, "$399.97");
        assert!(view.checkout_enabled);
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn catalog_cards_are_numbered() {
        let cards = project_catalog(&Catalog::builtin(), "€");
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[4].position, 5);
        assert_eq!(cards[4].price_label, "€29.99");
    }

    #[test]
    fn image_name_strips_directories() {
        assert_eq!(image_name("../assets/images/a.jpg"), "a.jpg");
        assert_eq!(image_name("b.png"), "b.png");
    }
}
