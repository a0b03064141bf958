//! Submission task
//!
//! Drives one chat submission from request to end of stream and reports
//! progress as [`SubmitEvent`]s on an unbounded channel. The receiving side
//! (the UI loop) is the only writer of page state.
//!
//! Chunks are forwarded strictly in order: chunk N is sent before chunk N+1
//! is awaited. The cancellation token is checked before every send; once it
//! fires nothing else is delivered.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::backend::ChatBackend;
use crate::form::ChatRequest;
use crate::stream::ChunkStream;

/// Progress of a running submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitEvent {
    /// Decoded text to append to the response buffer
    Chunk(String),
    /// Body ended normally
    Completed,
    /// Request or stream failed; text already delivered stays valid
    Failed(String),
}

impl SubmitEvent {
    /// True for the last event of a submission
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SubmitEvent::Chunk(_))
    }
}

/// How a submission task ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Completed,
    Failed,
    Cancelled,
    /// Receiver was dropped before the stream ended
    Abandoned,
}

/// Forward a stream's chunks to `tx` until it ends, fails or is cancelled
pub async fn pump(
    mut stream: ChunkStream,
    tx: &mpsc::UnboundedSender<SubmitEvent>,
    cancel: &CancellationToken,
) -> SubmitOutcome {
    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            next = stream.next_chunk() => Some(next),
        };

        // Cancellation may have fired while the read was completing
        let Some(next) = next.filter(|_| !cancel.is_cancelled()) else {
            debug!(
                "Submission cancelled after {} chunks",
                stream.chunks_received()
            );
            return SubmitOutcome::Cancelled;
        };

        let (event, outcome) = match next {
            Some(Ok(text)) => (SubmitEvent::Chunk(text), None),
            Some(Err(e)) => (SubmitEvent::Failed(e.to_string()), Some(SubmitOutcome::Failed)),
            None => (SubmitEvent::Completed, Some(SubmitOutcome::Completed)),
        };

        if tx.send(event).is_err() {
            debug!("Submit receiver dropped");
            return SubmitOutcome::Abandoned;
        }
        if let Some(outcome) = outcome {
            return outcome;
        }
    }
}

/// Open the stream for `request` and pump it into `tx`
pub async fn run_submission(
    backend: Arc<dyn ChatBackend>,
    request: ChatRequest,
    tx: mpsc::UnboundedSender<SubmitEvent>,
    cancel: CancellationToken,
) -> SubmitOutcome {
    let started = Instant::now();

    let opened = tokio::select! {
        biased;
        _ = cancel.cancelled() => return SubmitOutcome::Cancelled,
        opened = backend.open_stream(&request) => opened,
    };
    if cancel.is_cancelled() {
        return SubmitOutcome::Cancelled;
    }

    let outcome = match opened {
        Ok(stream) => pump(stream, &tx, &cancel).await,
        Err(e) => {
            match e.status() {
                Some(status) => warn!("Chat request rejected with HTTP {}", status),
                None => warn!("Chat submission failed: {}", e),
            }
            if tx.send(SubmitEvent::Failed(e.to_string())).is_err() {
                SubmitOutcome::Abandoned
            } else {
                SubmitOutcome::Failed
            }
        }
    };

    info!(
        "Submission finished: {:?} in {:?}",
        outcome,
        started.elapsed()
    );
    outcome
}

/// Spawn a submission task, returning its event receiver and handle
pub fn spawn_submission(
    backend: Arc<dyn ChatBackend>,
    request: ChatRequest,
    cancel: CancellationToken,
) -> (mpsc::UnboundedReceiver<SubmitEvent>, JoinHandle<SubmitOutcome>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(run_submission(backend, request, tx, cancel));
    (rx, handle)
}
