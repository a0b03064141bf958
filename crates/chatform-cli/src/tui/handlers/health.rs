//! Health probe handlers
//!
//! One probe on start and one per refresh, each in its own task.

use tokio::sync::oneshot::error::TryRecvError;

use crate::tui::app::App;

impl App {
    /// Start an async health probe
    pub fn start_health_check(&mut self) {
        // Don't start if already probing
        if self.channels.health.is_some() {
            return;
        }

        self.page.begin_health();

        let (tx, rx) = tokio::sync::oneshot::channel();
        self.channels.health = Some(rx);

        let backend = self.backend.clone();
        let cancel = self.cancel.child_token();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                status = backend.check_health() => {
                    let _ = tx.send(status);
                }
            }
        });
    }

    /// Poll for probe completion; returns true when the status changed
    pub fn poll_health(&mut self) -> bool {
        let Some(rx) = &mut self.channels.health else {
            return false;
        };
        match rx.try_recv() {
            Ok(status) => {
                self.channels.health = None;
                self.page.finish_health(status);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                // Task ended without reporting
                tracing::warn!("Health probe ended without a result");
                self.channels.health = None;
                self.page.finish_health(chatform_core::ApiStatus::offline());
                true
            }
        }
    }
}
