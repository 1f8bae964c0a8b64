use crate::cart::lines::{Cart, CartLine, QuantityChange, QuantityOutcome};
use crate::catalog::{Catalog, ProductId};
use crate::money::Money;
use crate::storage::{CartStorage, StorageError};

/// Result of [`CartStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added { title: &'static str, quantity: u32 },
    UnknownProduct,
}

impl AddOutcome {
    /// Title to confirm to the user, if the add went through.
    pub fn confirmed_title(&self) -> Option<&'static str> {
        match self {
            Self::Added { title, .. } => Some(*title),
            Self::UnknownProduct => None,
        }
    }
}

/// Summary of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub total: Money,
    pub item_count: u32,
    pub lines: Vec<CartLine>,
}

/// The single source of truth for cart contents.
///
/// Every mutation that changes the cart is written through to the injected
/// [`CartStorage`] before returning. Unknown product ids are never errors:
/// they come back as dedicated outcome variants and leave the cart alone.
pub struct CartStore {
    cart: Cart,
    catalog: Catalog,
    storage: Box<dyn CartStorage>,
}

impl CartStore {
    /// Restore the cart from `storage`.
    pub fn open(catalog: Catalog, storage: Box<dyn CartStorage>) -> Result<Self, StorageError> {
        let cart = storage.load()?;
        tracing::info!(
            lines = cart.len(),
            items = cart.item_count(),
            "cart store opened"
        );
        Ok(Self {
            cart,
            catalog,
            storage,
        })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn add(&mut self, product_id: ProductId) -> Result<AddOutcome, StorageError> {
        let Some(product) = self.catalog.find(product_id) else {
            tracing::debug!(%product_id, "add ignored: product not in catalog");
            return Ok(AddOutcome::UnknownProduct);
        };
        let quantity = self.cart.add(product);
        tracing::debug!(%product_id, quantity, "added to cart");
        self.persist()?;
        Ok(AddOutcome::Added {
            title: product.title,
            quantity,
        })
    }

    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        change: QuantityChange,
    ) -> Result<QuantityOutcome, StorageError> {
        let outcome = self.cart.change_quantity(product_id, change);
        match outcome {
            QuantityOutcome::NotInCart => {
                tracing::debug!(%product_id, ?change, "quantity change ignored: not in cart");
            }
            QuantityOutcome::Changed { quantity } => {
                tracing::debug!(%product_id, quantity, "quantity changed");
                self.persist()?;
            }
            QuantityOutcome::Removed => {
                tracing::debug!(%product_id, "line removed by decrease");
                self.persist()?;
            }
        }
        Ok(outcome)
    }

    /// Remove the line for `product_id`, if any. Returns whether it existed.
    pub fn remove(&mut self, product_id: ProductId) -> Result<bool, StorageError> {
        if !self.cart.remove(product_id) {
            tracing::debug!(%product_id, "remove ignored: not in cart");
            return Ok(false);
        }
        tracing::debug!(%product_id, "line removed");
        self.persist()?;
        Ok(true)
    }

    /// Empty the cart and persist the empty state.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        if !self.cart.clear() {
            return Ok(());
        }
        tracing::debug!("cart cleared");
        self.persist()
    }

    /// Simulated checkout. `None` when the cart is empty.
    pub fn checkout(&mut self) -> Result<Option<Receipt>, StorageError> {
        if self.cart.is_empty() {
            tracing::debug!("checkout ignored: cart is empty");
            return Ok(None);
        }
        let receipt = Receipt {
            total: self.cart.total(),
            item_count: self.cart.item_count(),
            lines: self.cart.lines().to_vec(),
        };
        self.cart.clear();
        tracing::info!(
            total = %receipt.total,
            items = receipt.item_count,
            "checkout completed"
        );
        self.persist()?;
        Ok(Some(receipt))
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(&self.cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueCartStorage, MemoryStore};

    fn open(memory: &MemoryStore) -> CartStore {
        CartStore::open(
            Catalog::builtin(),
            Box::new(KeyValueCartStorage::new(memory.clone())),
        )
        .unwrap()
    }

    #[test]
    fn unknown_product_is_not_persisted() {
        let memory = MemoryStore::new();
        let mut store = open(&memory);
        assert_eq!(store.add(ProductId(77)).unwrap(), AddOutcome::UnknownProduct);
        assert_eq!(memory.writes(), 0);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn every_change_is_written_through() {
        let memory = MemoryStore::new();
        let mut store = open(&memory);
        store.add(ProductId(1)).unwrap();
        store
            .update_quantity(ProductId(1), QuantityChange::Increase)
            .unwrap();
        store.remove(ProductId(1)).unwrap();
        assert_eq!(memory.writes(), 3);

        store.remove(ProductId(1)).unwrap();
        assert_eq!(memory.writes(), 3);
    }

    #[test]
    fn add_reports_title_and_quantity() {
        let memory = MemoryStore::new();
        let mut store = open(&memory);
        store.add(ProductId(4)).unwrap();
        let outcome = store.add(ProductId(4)).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Added {
                title: "Krobo Language",
                quantity: 2
            }
        );
        assert_eq!(outcome.confirmed_title(), Some("Krobo Language"));
    }
}
