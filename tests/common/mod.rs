//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fakes;
pub mod mock_backend;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use tokio::sync::mpsc::UnboundedReceiver;
use yac::action::{Action, IntentKind, Outcome};
use yac::saga::{Coordinator, CoordinatorHandle};

use fakes::{FakeApi, FakeIdentity};

/// Upper bound for any single coordinator round-trip in tests.
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Start a coordinator over fresh fakes watching every intent kind.
pub fn start_coordinator() -> (CoordinatorHandle, Arc<FakeIdentity>, Arc<FakeApi>) {
    start_watching(&IntentKind::ALL)
}

/// Start a coordinator over fresh fakes watching only `kinds`.
pub fn start_watching(
    kinds: &[IntentKind],
) -> (CoordinatorHandle, Arc<FakeIdentity>, Arc<FakeApi>) {
    let identity = Arc::new(FakeIdentity::default());
    let api = Arc::new(FakeApi::default());
    let handle = Coordinator::new(identity.clone(), api.clone())
        .watching(kinds)
        .start();
    (handle, identity, api)
}

/// Wait for the coordinator to settle, then drain everything published.
pub async fn settle(
    handle: &CoordinatorHandle,
    actions: &mut UnboundedReceiver<Action>,
) -> Vec<Action> {
    tokio::time::timeout(SETTLE_TIMEOUT, handle.wait_idle())
        .await
        .expect("coordinator did not settle");

    let mut published = Vec::new();
    while let Ok(action) = actions.try_recv() {
        published.push(action);
    }
    published
}

/// Outcomes only, in publish order.
pub fn outcomes(actions: &[Action]) -> Vec<Outcome> {
    actions
        .iter()
        .filter_map(|action| action.as_outcome().cloned())
        .collect()
}

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
