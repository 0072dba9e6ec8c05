//! Per-invocation state machine.
//!
//! ```text
//! Idle ──→ InFlight ──┬──→ Succeeded
//!                     ├──→ Failed
//!                     └──→ NoOp
//! ```
//!
//! Terminal states are final; nothing moves back to `InFlight`.

use thiserror::Error;
use uuid::Uuid;

use crate::action::IntentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    Idle,
    InFlight,
    Succeeded,
    Failed,
    NoOp,
}

impl InvocationState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            InvocationState::Succeeded | InvocationState::Failed | InvocationState::NoOp
        )
    }
}

/// How a handler run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Adapter call settled successfully and outcome(s) were emitted
    Succeeded,
    /// Adapter call failed and a failure outcome was emitted
    Failed,
    /// Preconditions not met; nothing was called or emitted
    NoOp,
}

impl From<Completion> for InvocationState {
    fn from(completion: Completion) -> Self {
        match completion {
            Completion::Succeeded => InvocationState::Succeeded,
            Completion::Failed => InvocationState::Failed,
            Completion::NoOp => InvocationState::NoOp,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid invocation transition {from:?} -> {to:?}")]
pub struct TransitionError {
    pub from: InvocationState,
    pub to: InvocationState,
}

/// One run of one handler.
#[derive(Debug)]
pub struct Invocation {
    id: Uuid,
    kind: IntentKind,
    state: InvocationState,
}

impl Invocation {
    pub fn new(kind: IntentKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            state: InvocationState::Idle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> IntentKind {
        self.kind
    }

    pub fn state(&self) -> InvocationState {
        self.state
    }

    /// `Idle -> InFlight`.
    pub fn begin(&mut self) -> Result<(), TransitionError> {
        self.transition(InvocationState::Idle, InvocationState::InFlight)
    }

    /// `InFlight -> terminal`.
    pub fn finish(&mut self, completion: Completion) -> Result<(), TransitionError> {
        self.transition(InvocationState::InFlight, completion.into())
    }

    fn transition(
        &mut self,
        expected: InvocationState,
        to: InvocationState,
    ) -> Result<(), TransitionError> {
        if self.state != expected {
            return Err(TransitionError {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }
}
