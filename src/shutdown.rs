use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Shared stop flag for the coordinator and the terminal event thread.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Signal shutdown. Returns `true` for the call that flipped the flag.
    pub fn signal(&self) -> bool {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Shutdown signaled");
            self.notify.notify_waiters();
            return true;
        }
        false
    }

    pub async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag: signal() could fire
        // between the check and the await, and notify_waiters() would have
        // no subscribers.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn signal_flips_once() {
        let handle = ShutdownHandle::new();
        assert!(!handle.is_shutting_down());
        assert!(handle.signal());
        assert!(!handle.clone().signal());
        assert!(handle.is_shutting_down());
    }

    #[tokio::test]
    async fn wait_returns_after_signal() {
        let handle = ShutdownHandle::new();
        let waiter = handle.clone();
        let task = tokio::spawn(async move { waiter.wait().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.signal();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("wait should complete")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_already_signaled() {
        let handle = ShutdownHandle::new();
        handle.signal();
        handle.wait().await;
    }
}
