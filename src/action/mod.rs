//! Action channel vocabulary.
//!
//! ```text
//! View ──Intent──→ Coordinator ──Action──→ observers (store, CLI)
//!                      ↑   │
//!                      └───┘ derived intents
//! ```
//!
//! - **Intent**: request to start a workflow
//! - **Outcome**: terminal result of one workflow invocation
//! - **Action**: anything the coordinator publishes (outcomes and derived intents)

mod intent;
mod outcome;
mod payload;

use serde::Serialize;

pub use intent::{Intent, IntentKind};
pub use outcome::Outcome;
pub use payload::{
    ChatMessage, ChatUpdate, Credentials, Failure, NewAccount, SocialSignIn, UserProfile,
    UserQuery,
};

/// Unit published to coordinator observers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Action {
    Intent(Intent),
    Outcome(Outcome),
}

impl Action {
    pub fn as_outcome(&self) -> Option<&Outcome> {
        match self {
            Action::Outcome(outcome) => Some(outcome),
            Action::Intent(_) => None,
        }
    }

    pub fn as_intent(&self) -> Option<&Intent> {
        match self {
            Action::Intent(intent) => Some(intent),
            Action::Outcome(_) => None,
        }
    }
}

impl From<Intent> for Action {
    fn from(intent: Intent) -> Self {
        Action::Intent(intent)
    }
}

impl From<Outcome> for Action {
    fn from(outcome: Outcome) -> Self {
        Action::Outcome(outcome)
    }
}
