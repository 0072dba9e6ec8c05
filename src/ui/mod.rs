//! Terminal sign-up form.
//!
//! ```text
//! crossterm thread ─┐
//!                   ├─→ std mpsc ─→ event loop ─→ App (store + sign-up MVI) ─→ render
//! coordinator  ─────┘                   │
//!   (actions)                           └─→ CoordinatorHandle::dispatch
//! ```

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod signup;
pub mod store;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
