//! Transient "added to cart" notifications.
//!
//! Each toast runs its own timeline and is never cancelled or merged with
//! others; several can be on screen at once.

mod intent;
mod reducer;
mod state;

pub use intent::ToastIntent;
pub use reducer::ToastReducer;
pub use state::{Toast, ToastPhase, ToastState, ToastTiming};
