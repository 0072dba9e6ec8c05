//! Workflow coordinator.
//!
//! Owns one watcher per intent kind. Each watcher spawns an independent task
//! for every intent it receives; tasks call the identity or API adapter,
//! then publish outcomes (and derived intents) to all observers.
//!
//! No concurrency limit, ordering guarantee between concurrent invocations,
//! timeout, or cancellation is imposed here.

mod coordinator;
mod handlers;
mod invocation;
mod observers;
mod profile;

pub use coordinator::{Coordinator, CoordinatorError, CoordinatorHandle};
pub use invocation::{Completion, Invocation, InvocationState, TransitionError};
pub use profile::derive_profile;
