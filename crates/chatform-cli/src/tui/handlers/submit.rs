//! Submission handlers
//!
//! Starting, polling, stopping and clearing a chat submission.

use chatform_core::spawn_submission;
use tokio::sync::mpsc::error::TryRecvError;

use crate::tui::app::App;
use crate::tui::channels::SubmitChannel;

impl App {
    /// Validate the form and start streaming a response
    pub fn start_submit(&mut self) {
        let Some(request) = self.page.begin_submit() else {
            return;
        };
        tracing::info!("Submitting chat request: {:?}", request);

        let cancel = self.cancel.child_token();
        let (events, handle) = spawn_submission(self.backend.clone(), request, cancel.clone());
        tokio::spawn(async move {
            match handle.await {
                Ok(outcome) => tracing::debug!("Submission task ended: {:?}", outcome),
                Err(e) => tracing::error!("Submission task panicked: {}", e),
            }
        });
        self.channels.submit = Some(SubmitChannel { events, cancel });
        self.ui.response_scroll_back = 0;
    }

    /// Apply every pending submission event; returns true when state changed
    pub fn poll_submit(&mut self) -> bool {
        let Some(channel) = &mut self.channels.submit else {
            return false;
        };

        let mut changed = false;
        loop {
            match channel.events.try_recv() {
                Ok(event) => {
                    let terminal = event.is_terminal();
                    self.page.apply(event);
                    changed = true;
                    if terminal {
                        self.channels.submit = None;
                        break;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("Submission ended without a final event");
                    self.page.abandon_submit();
                    self.channels.submit = None;
                    changed = true;
                    break;
                }
            }
        }
        changed
    }

    /// Stop the running submission, keeping the text received so far
    pub fn stop_submit(&mut self) {
        if let Some(channel) = self.channels.submit.take() {
            tracing::info!("Stopping submission");
            channel.cancel.cancel();
            self.page.abandon_submit();
        }
    }

    /// Clear response, error and messages; model and API key are kept
    pub fn clear_form(&mut self) {
        self.stop_submit();
        self.page.clear();
        self.ui.editors.clamp_all(&self.page.form);
        self.ui.response_scroll_back = 0;
    }
}
