//! Readiness signal for the Discord gateway connection.

use std::sync::Arc;
use tokio::sync::watch;

/// Flips once from "not ready" to "ready" when the gateway reports `ready`.
///
/// Cloned into every component that must not touch Discord before the bot is
/// connected. Waiting suspends the task; it never polls.
#[derive(Clone)]
pub struct ReadyGate {
    state: Arc<watch::Sender<bool>>,
}

impl ReadyGate {
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
        }
    }

    pub fn mark_ready(&self) {
        self.state.send_replace(true);
    }

    pub fn is_ready(&self) -> bool {
        *self.state.borrow()
    }

    /// Suspends until `mark_ready` has been called, returning immediately if it
    /// already was.
    pub async fn wait(&self) {
        let mut receiver = self.state.subscribe();
        // The sender lives as long as `self`, so this cannot observe a closed channel.
        let _ = receiver.wait_for(|ready| *ready).await;
    }
}

impl Default for ReadyGate {
    fn default() -> Self {
        Self::new()
    }
}
