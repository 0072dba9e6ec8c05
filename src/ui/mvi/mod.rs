//! Model-View-Intent primitives shared by the store and the sign-up form.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers here are pure. Anything that talks to the network goes through
//! the coordinator instead, and comes back as an `Action` intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
