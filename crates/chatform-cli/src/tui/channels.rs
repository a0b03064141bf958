//! Async Channels
//!
//! Receivers for the background tasks the app is waiting on.

use chatform_core::{ApiStatus, SubmitEvent};
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

/// A running submission: its event feed and the token that stops it
pub struct SubmitChannel {
    pub events: mpsc::UnboundedReceiver<SubmitEvent>,
    pub cancel: CancellationToken,
}

/// Channel receivers for in-flight background work
#[derive(Default)]
pub struct AsyncChannels {
    /// Pending health probe
    pub health: Option<oneshot::Receiver<ApiStatus>>,
    /// Running chat submission
    pub submit: Option<SubmitChannel>,
}
