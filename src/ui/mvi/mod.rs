//! Model-View-Intent (MVI) primitives for the transient UI layers.
//!
//! The cart panel, the toast stack and the checkout receipt are each a
//! small state machine driven by intents:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ draw()
//!    ↑                               │
//!    └──────── click / key / tick ───┘
//! ```
//!
//! Cart contents are not part of this: they live in
//! [`crate::cart::CartStore`], which persists itself and is read fresh on
//! every draw.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
