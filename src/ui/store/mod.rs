//! Global client store.
//!
//! Holds the sign-up form, the signed-in user and the last error. Updated by
//! `UserUpdate` keystrokes and by every action the coordinator publishes.

mod intent;
mod reducer;
mod state;

pub use intent::StoreIntent;
pub use reducer::StoreReducer;
pub use state::{AuthStatus, FormField, SignUpForm, UserStore};
