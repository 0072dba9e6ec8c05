//! Sign-up form screen.
//!
//! Only focus and the active screen live here. Field values belong to the
//! global [`UserStore`](crate::ui::store::UserStore).

mod intent;
mod reducer;
mod state;

pub use intent::SignUpIntent;
pub use reducer::SignUpReducer;
pub use state::{Focus, Screen, SignUpState};
