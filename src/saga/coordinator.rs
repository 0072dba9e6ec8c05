//! Intent routing and take-every scheduling.
//!
//! ```text
//! dispatch() ─→ intake ─→ router ─┬─→ watcher(CreateAccount) ─→ spawn invocation
//!                  ↑              ├─→ watcher(SignIn)        ─→ spawn invocation
//!                  │              └─→ ...
//!                  └──────── derived intents ←── Workflow::put
//! ```
//!
//! Every intent is counted as pending from `dispatch` until its invocation
//! reaches a terminal state, which is what `wait_idle` observes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Notify;

use crate::action::{Action, Intent, IntentKind};
use crate::api::RemoteApi;
use crate::identity::IdentityBackend;
use crate::shutdown::ShutdownHandle;

use super::handlers::Workflow;
use super::observers::ObserverSet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinatorError {
    #[error("Coordinator stopped; {kind} intent rejected")]
    Stopped { kind: IntentKind },
}

/// State shared by the handle, the router and every invocation.
pub(super) struct Shared {
    intake: UnboundedSender<Intent>,
    observers: ObserverSet,
    pending: AtomicUsize,
    idle: Notify,
    shutdown: ShutdownHandle,
    log_actions: bool,
}

impl Shared {
    fn dispatch(&self, intent: Intent) -> Result<(), CoordinatorError> {
        let kind = intent.kind();
        if self.shutdown.is_shutting_down() {
            return Err(CoordinatorError::Stopped { kind });
        }

        self.pending.fetch_add(1, Ordering::SeqCst);
        if self.intake.send(intent).is_err() {
            self.settle();
            return Err(CoordinatorError::Stopped { kind });
        }
        Ok(())
    }

    /// Mark one pending intent as done.
    pub(super) fn settle(&self) {
        if self.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.idle.notify_waiters();
        }
    }

    pub(super) fn publish(&self, action: Action) {
        if self.log_actions {
            tracing::info!(action = ?action, "Action published");
        }
        self.observers.publish(&action);

        if let Action::Intent(intent) = action {
            if let Err(err) = self.dispatch(intent) {
                tracing::warn!(error = %err, "Derived intent dropped");
            }
        }
    }
}

/// Builder for the workflow coordinator.
pub struct Coordinator {
    identity: Arc<dyn IdentityBackend>,
    api: Arc<dyn RemoteApi>,
    kinds: Vec<IntentKind>,
    log_actions: bool,
}

impl Coordinator {
    /// A coordinator watching every intent kind.
    pub fn new(identity: Arc<dyn IdentityBackend>, api: Arc<dyn RemoteApi>) -> Self {
        Self {
            identity,
            api,
            kinds: IntentKind::ALL.to_vec(),
            log_actions: false,
        }
    }

    /// Register watchers only for `kinds`. Intents of any other kind are
    /// discarded with a warning.
    pub fn watching(mut self, kinds: &[IntentKind]) -> Self {
        self.kinds = kinds.to_vec();
        self
    }

    pub fn log_actions(mut self, enabled: bool) -> Self {
        self.log_actions = enabled;
        self
    }

    /// Spawn the router and one watcher per registered kind.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(self) -> CoordinatorHandle {
        let (intake_tx, intake_rx) = mpsc::unbounded_channel();
        let shared = Arc::new(Shared {
            intake: intake_tx,
            observers: ObserverSet::default(),
            pending: AtomicUsize::new(0),
            idle: Notify::new(),
            shutdown: ShutdownHandle::new(),
            log_actions: self.log_actions,
        });

        let workflow = Arc::new(Workflow {
            identity: self.identity,
            api: self.api,
            shared: Arc::clone(&shared),
        });

        let mut routes = HashMap::new();
        for kind in self.kinds {
            if routes.contains_key(&kind) {
                continue;
            }
            let (tx, rx) = mpsc::unbounded_channel();
            routes.insert(kind, tx);
            tokio::spawn(watch(kind, rx, Arc::clone(&workflow)));
        }

        tracing::info!(watchers = routes.len(), "Coordinator started");
        tokio::spawn(route(intake_rx, routes, Arc::clone(&shared)));

        CoordinatorHandle { shared }
    }
}

/// Forward each intent to the watcher registered for its kind.
async fn route(
    mut intake: UnboundedReceiver<Intent>,
    routes: HashMap<IntentKind, UnboundedSender<Intent>>,
    shared: Arc<Shared>,
) {
    loop {
        tokio::select! {
            _ = shared.shutdown.wait() => break,
            next = intake.recv() => match next {
                Some(intent) => forward(&routes, &shared, intent),
                None => break,
            },
        }
    }

    intake.close();
    while let Ok(intent) = intake.try_recv() {
        tracing::debug!(kind = %intent.kind(), "Intent dropped at shutdown");
        shared.settle();
    }
    tracing::info!("Coordinator router stopped");
}

fn forward(routes: &HashMap<IntentKind, UnboundedSender<Intent>>, shared: &Shared, intent: Intent) {
    let kind = intent.kind();
    match routes.get(&kind) {
        Some(watcher) => {
            if watcher.send(intent).is_err() {
                tracing::warn!(kind = %kind, "Watcher gone; intent dropped");
                shared.settle();
            }
        }
        None => {
            tracing::warn!(kind = %kind, "No handler registered; intent dropped");
            shared.settle();
        }
    }
}

/// Take-every loop: each intent gets its own task.
async fn watch(kind: IntentKind, mut rx: UnboundedReceiver<Intent>, workflow: Arc<Workflow>) {
    tracing::debug!(kind = %kind, "Watcher started");
    while let Some(intent) = rx.recv().await {
        let workflow = Arc::clone(&workflow);
        tokio::spawn(async move { workflow.invoke(intent).await });
    }
    tracing::debug!(kind = %kind, "Watcher stopped");
}

/// Cloneable handle to a running coordinator.
#[derive(Clone)]
pub struct CoordinatorHandle {
    shared: Arc<Shared>,
}

impl CoordinatorHandle {
    /// Queue an intent. Never blocks.
    pub fn dispatch(&self, intent: Intent) -> Result<(), CoordinatorError> {
        tracing::debug!(kind = %intent.kind(), "Intent dispatched");
        self.shared.dispatch(intent)
    }

    /// Receive every action published from now on.
    pub fn subscribe(&self) -> UnboundedReceiver<Action> {
        self.shared.observers.subscribe()
    }

    /// Number of intents dispatched but not yet settled.
    pub fn pending(&self) -> usize {
        self.shared.pending.load(Ordering::SeqCst)
    }

    /// Resolve once nothing is pending, including derived intents.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.shared.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.pending() == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Stop accepting intents. In-flight invocations keep running, but any
    /// intent they derive (e.g. `CreateUserRecord` after `CreateAccount`) is
    /// still published to observers and then dropped without running.
    pub fn shutdown(&self) {
        self.shared.shutdown.signal();
    }

    pub fn is_running(&self) -> bool {
        !self.shared.shutdown.is_shutting_down()
    }
}
