//! Stream session: one streaming HTTP call.
//!
//! A session opens `GET url` with `Accept: text/event-stream`, frames the
//! body and hands each payload to a callback, in order, until the caller
//! cancels, the server closes the stream or a fatal error occurs.

use std::sync::Arc;

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use super::cancellation::{Cancellation, StreamOutcome};
use crate::error::StreamError;
use crate::sse;
use crate::traits::{Headers, HttpClient};

/// One streaming call against an event-stream resource.
pub struct StreamSession<C: HttpClient + ?Sized> {
    http: Arc<C>,
    url: String,
    cancel: Cancellation,
}

impl<C: HttpClient + ?Sized> StreamSession<C> {
    /// Create a session for `url`. Nothing is sent until [`run`](Self::run).
    pub fn new(http: Arc<C>, url: impl Into<String>, cancel: CancellationToken) -> Self {
        Self {
            http,
            url: url.into(),
            cancel: Cancellation::new(cancel),
        }
    }

    /// Drive the stream, invoking `on_payload` once per received event.
    ///
    /// Returns `Ok(())` when the caller cancels or the server closes the
    /// stream. An error returned by `on_payload` ends the call and is
    /// returned unchanged. The connection is released on every exit path.
    pub async fn run<F>(self, on_payload: F) -> Result<(), StreamError>
    where
        F: FnMut(&[u8]) -> Result<(), StreamError> + Send,
    {
        let outcome = self.drive(on_payload).await?;
        match outcome {
            StreamOutcome::Cancelled => tracing::info!(url = %self.url, "Stream cancelled"),
            StreamOutcome::Closed => tracing::info!(url = %self.url, "Stream closed by server"),
        }
        Ok(())
    }

    async fn drive<F>(&self, mut on_payload: F) -> Result<StreamOutcome, StreamError>
    where
        F: FnMut(&[u8]) -> Result<(), StreamError> + Send,
    {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "text/event-stream".to_string());
        headers.insert("Cache-Control".to_string(), "no-cache".to_string());

        tracing::info!(url = %self.url, "Opening stream");

        let opened = tokio::select! {
            biased;
            () = self.cancel.cancelled() => return Ok(StreamOutcome::Cancelled),
            opened = self.http.get_stream(&self.url, &headers) => opened,
        };

        let response = match opened {
            Ok(response) => response,
            Err(e) => {
                let outcome = self.cancel.classify(StreamError::Transport(e));
                if let Err(err) = &outcome {
                    tracing::warn!(url = %self.url, error = %err, "Failed to open stream");
                }
                return outcome;
            }
        };

        if !response.is_success() {
            let status = response.status;
            tracing::warn!(url = %self.url, status, "Stream rejected");
            return Err(StreamError::BadStatus { status });
        }

        let mut frames = sse::frames(response.body);
        let mut delivered: u64 = 0;

        loop {
            let next = tokio::select! {
                biased;
                () = self.cancel.cancelled() => {
                    tracing::debug!(delivered, "Cancellation requested, releasing stream");
                    return Ok(StreamOutcome::Cancelled);
                }
                next = frames.next() => next,
            };

            let frame = match next {
                Some(Ok(frame)) => frame,
                Some(Err(e)) => {
                    let outcome = self.cancel.classify(StreamError::from(e));
                    if let Err(err) = &outcome {
                        tracing::warn!(url = %self.url, delivered, error = %err, "Stream failed");
                    }
                    return outcome;
                }
                None => return Ok(StreamOutcome::Closed),
            };

            if frame.is_open_greeting() {
                tracing::debug!("Skipping stream greeting");
                continue;
            }

            if let Err(err) = on_payload(&frame.data) {
                tracing::warn!(url = %self.url, delivered, error = %err, "Stream handler failed");
                return Err(err);
            }
            delivered += 1;
            tracing::debug!(delivered, bytes = frame.data.len(), "Dispatched event");
        }
    }
}
