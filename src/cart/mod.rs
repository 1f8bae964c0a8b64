//! Cart state and the store that keeps it persisted.

mod lines;
mod store;

pub use lines::{Cart, CartLine, InvalidCart, QuantityChange, QuantityOutcome};
pub use store::{AddOutcome, CartStore, Receipt};
