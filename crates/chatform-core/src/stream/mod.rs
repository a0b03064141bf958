//! Streamed response body as a sequence of decoded text chunks
//!
//! `ChunkStream` is the single suspension point of a submission: each
//! `next_chunk().await` resumes when the transport delivers more bytes or
//! signals the end of the body.

mod decoder;

pub use decoder::Utf8StreamDecoder;

use std::fmt::Display;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{Stream, StreamExt};
use tracing::{debug, trace, warn};

use crate::error::ChatError;

/// Finite, non-restartable stream of decoded text
///
/// Yields `Ok(text)` for every chunk that completes at least one character,
/// at most one `Err` (after which it is exhausted), then `None` forever.
/// Bytes of a character cut off by the end of the body or by a transport
/// error come out as one U+FFFD, ahead of the error if there is one.
pub struct ChunkStream {
    inner: BoxStream<'static, Result<Bytes, ChatError>>,
    decoder: Utf8StreamDecoder,
    finished: bool,
    /// Error held back while the decoder tail is delivered
    deferred_error: Option<ChatError>,
    chunks_received: usize,
    bytes_received: usize,
}

impl ChunkStream {
    /// Wrap a raw byte stream (e.g. `reqwest::Response::bytes_stream`)
    pub fn new<S, B, E>(bytes: S) -> Self
    where
        S: Stream<Item = Result<B, E>> + Send + 'static,
        B: Into<Bytes> + 'static,
        E: Display + 'static,
    {
        let inner = bytes
            .map(|item| {
                item.map(Into::into)
                    .map_err(|e| ChatError::Stream(e.to_string()))
            })
            .boxed();
        Self {
            inner,
            decoder: Utf8StreamDecoder::new(),
            finished: false,
            deferred_error: None,
            chunks_received: 0,
            bytes_received: 0,
        }
    }

    /// Build a stream from in-memory chunks
    pub fn from_chunks<I, B>(chunks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        I::IntoIter: Send + 'static,
        B: Into<Bytes> + 'static,
    {
        Self::new(futures::stream::iter(
            chunks.into_iter().map(Ok::<B, ChatError>),
        ))
    }

    /// Await the next decoded chunk
    pub async fn next_chunk(&mut self) -> Option<Result<String, ChatError>> {
        self.next().await
    }

    /// Raw chunks seen so far
    pub fn chunks_received(&self) -> usize {
        self.chunks_received
    }

    /// Raw bytes seen so far
    pub fn bytes_received(&self) -> usize {
        self.bytes_received
    }
}

impl Stream for ChunkStream {
    type Item = Result<String, ChatError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if this.finished {
                return Poll::Ready(this.deferred_error.take().map(Err));
            }
            match this.inner.poll_next_unpin(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Some(Ok(bytes))) => {
                    this.chunks_received += 1;
                    this.bytes_received += bytes.len();
                    trace!(
                        "Chunk #{} received: {} bytes",
                        this.chunks_received,
                        bytes.len()
                    );
                    let text = this.decoder.decode(&bytes);
                    // A chunk holding only part of a character yields nothing yet
                    if !text.is_empty() {
                        return Poll::Ready(Some(Ok(text)));
                    }
                }
                Poll::Ready(Some(Err(e))) => {
                    warn!(
                        "Stream read error after {} chunks: {}",
                        this.chunks_received, e
                    );
                    this.finished = true;
                    let tail = this.decoder.finish();
                    if tail.is_empty() {
                        return Poll::Ready(Some(Err(e)));
                    }
                    this.deferred_error = Some(e);
                    return Poll::Ready(Some(Ok(tail)));
                }
                Poll::Ready(None) => {
                    debug!(
                        "Stream ended after {} chunks ({} bytes)",
                        this.chunks_received, this.bytes_received
                    );
                    this.finished = true;
                    let tail = this.decoder.finish();
                    if tail.is_empty() {
                        return Poll::Ready(None);
                    }
                    return Poll::Ready(Some(Ok(tail)));
                }
            }
        }
    }
}

#[cfg(test)]
impl ChunkStream {
    /// Drain the whole stream into one string, stopping at the first error
    pub(crate) async fn collect_text(mut self) -> Result<String, ChatError> {
        let mut text = String::new();
        while let Some(chunk) = self.next_chunk().await {
            text.push_str(&chunk?);
        }
        Ok(text)
    }
}
