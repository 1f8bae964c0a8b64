//! Confirmation shown after a simulated checkout.

mod intent;
mod reducer;
mod state;

pub use intent::ReceiptIntent;
pub use reducer::ReceiptReducer;
pub use state::ReceiptState;
