//! Stop signal for `EdgeServer::run`.
//!
//! `main` hands one clone to the signal listener and a receiver to the
//! server; tests keep the coordinator and fire it directly.

use tokio::sync::broadcast;

/// One-shot stop broadcast. Clones fire the same signal.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver for a server's graceful-shutdown future.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Stop every subscribed server. Ignored when none is running.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes on `trigger` or once every `Shutdown` clone is dropped.
pub async fn wait(mut rx: broadcast::Receiver<()>) {
    let _ = rx.recv().await;
}
