//! The fixed product catalog.
//!
//! Products are compiled into the binary. The catalog never changes at
//! runtime, so lookups cannot fail other than by returning `None`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Catalog-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub title: &'static str,
    pub price: Money,
    /// Image reference (relative asset path).
    pub image: &'static str,
}

const BUILTIN: &[Product] = &[
    Product {
        id: ProductId(1),
        title: "Fantse Language",
        price: Money::from_cents(9999),
        image: "../assets/images/whatsapp-image-2025-03-23-at-7.08.35-pm-506x506.jpg",
    },
    Product {
        id: ProductId(2),
        title: "Ashanti Language",
        price: Money::from_cents(19999),
        image: "../assets/images/whatsapp-image-2025-03-23-at-7.09.07-pm-506x506.jpg",
    },
    Product {
        id: ProductId(3),
        title: "Ga Language",
        price: Money::from_cents(7999),
        image: "../assets/images/whatsapp-image-2025-03-23-at-7.12.18-pm-506x506.jpg",
    },
    Product {
        id: ProductId(4),
        title: "Krobo Language",
        price: Money::from_cents(4999),
        image: "../assets/images/whatsapp-image-2025-03-23-at-7.09.27-pm-1280x1280.jpg",
    },
    Product {
        id: ProductId(5),
        title: "Ewe Language",
        price: Money::from_cents(2999),
        image: "../assets/images/whatsapp-image-2025-03-23-at-7.10.04-pm-1280x1280.jpg",
    },
];

/// Ordered, immutable set of products.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
}

impl Catalog {
    /// Catalog over an arbitrary static product list.
    pub const fn new(products: &'static [Product]) -> Self {
        Self { products }
    }

    /// The products this store sells.
    pub const fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    pub fn find(&self, id: ProductId) -> Option<&'static Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Product at a 1-based display position.
    pub fn nth(&self, position: usize) -> Option<&'static Product> {
        position
            .checked_sub(1)
            .and_then(|index| self.products.get(index))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
