use crate::cart::{Cart, CartLine};
use crate::storage::{CartStorage, KeyValueStore, StorageError};

/// Key the cart is stored under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Keeps the cart as a JSON array of lines under one key of a
/// [`KeyValueStore`], rewritten wholesale on every save.
pub struct KeyValueCartStorage<K> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> KeyValueCartStorage<K> {
    pub fn new(store: K) -> Self {
        Self::with_key(store, DEFAULT_CART_KEY)
    }

    pub fn with_key(store: K, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}

impl<K: KeyValueStore> CartStorage for KeyValueCartStorage<K> {
    fn load(&self) -> Result<Cart, StorageError> {
        let Some(raw) = self.store.get(&self.key)? else {
            tracing::debug!(key = %self.key, "no stored cart, starting empty");
            return Ok(Cart::new());
        };

        let lines: Vec<CartLine> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: self.key.clone(),
                source,
            })?;
        let cart = Cart::from_lines(lines).map_err(|source| StorageError::Invalid {
            key: self.key.clone(),
            source,
        })?;

        tracing::debug!(key = %self.key, lines = cart.len(), "restored cart");
        Ok(cart)
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart).map_err(StorageError::Encode)?;
        self.store.set(&self.key, &raw)?;
        tracing::trace!(key = %self.key, lines = cart.len(), "saved cart");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ProductId};
    use crate::storage::MemoryStore;

    #[test]
    fn missing_key_loads_empty_cart() {
        let storage = KeyValueCartStorage::new(MemoryStore::new());
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn saves_json_array_of_lines() {
        let memory = MemoryStore::new();
        let storage = KeyValueCartStorage::new(memory.clone());
        let mut cart = Cart::new();
        cart.add(Catalog::builtin().find(ProductId(5)).unwrap());
        storage.save(&cart).unwrap();

        let raw = memory.get(DEFAULT_CART_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], 5);
        assert_eq!(value[0]["title"], "Ewe Language");
        assert_eq!(value[0]["price"], 29.99);
        assert_eq!(value[0]["quantity"], 1);
    }

    #[test]
    fn garbage_value_is_corrupt() {
        let memory = MemoryStore::new();
        memory.set(DEFAULT_CART_KEY, "{not json").unwrap();
        let err = KeyValueCartStorage::new(memory).load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
        assert!(err.is_corrupt());
    }

    #[test]
    fn zero_quantity_is_invalid() {
        let memory = MemoryStore::new();
        memory
            .set(
                DEFAULT_CART_KEY,
                r#"[{"id":1,"title":"Fantse Language","price":99.99,"image":"a.jpg","quantity":0}]"#,
            )
            .unwrap();
        let err = KeyValueCartStorage::new(memory).load().unwrap_err();
        assert!(matches!(err, StorageError::Invalid { .. }));
    }
}
