//! Persistence for the cart.
//!
//! Two layers:
//!
//! - [`KeyValueStore`]: a local string key-value facility (a JSON file on
//!   disk, or memory in tests).
//! - [`CartStorage`]: what the cart store depends on, `load` and `save` of a
//!   whole [`Cart`]. [`KeyValueCartStorage`] adapts any key-value store by
//!   keeping the cart as a JSON array under a single key.

mod cart_storage;
mod error;
mod file;
mod memory;

pub use cart_storage::{KeyValueCartStorage, DEFAULT_CART_KEY};
pub use error::StorageError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::cart::Cart;

/// String key-value storage.
///
/// Methods take `&self`; implementations use interior mutability.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Succeeds when the key does not exist.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load/save of the whole cart, injected into [`crate::cart::CartStore`].
pub trait CartStorage: Send {
    /// Restore the persisted cart. Nothing persisted yields an empty cart.
    fn load(&self) -> Result<Cart, StorageError>;

    /// Overwrite the persisted cart with `cart`.
    fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}
