use crate::ShutdownCoordinator;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

/// Helper for gracefully handling shutdown in async tasks
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
    triggered: Arc<AtomicBool>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
            triggered: coordinator.triggered_flag(),
        }
    }

    /// Wait for shutdown signal. Returns at once if shutdown already happened.
    pub async fn wait(&mut self) {
        if self.triggered.load(Ordering::SeqCst) {
            return;
        }
        let _ = self.shutdown_rx.recv().await;
    }
}
