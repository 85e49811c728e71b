//! Cancellation of streaming calls.
//!
//! A stream runs until the caller cancels its [`CancellationToken`]. When the
//! token fires, the session drops the body stream, which releases the
//! connection. Tearing a connection down can surface as a read error on the
//! way out; [`Cancellation::classify`] makes sure such errors are reported as
//! a clean cancellation instead.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// How a streaming call ended without a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOutcome {
    /// The caller cancelled the stream.
    Cancelled,
    /// The server closed the stream.
    Closed,
}

/// Caller-owned cancellation signal of one streaming call.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    token: CancellationToken,
}

impl Cancellation {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the caller has cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    /// Decide whether a failure ends the call.
    ///
    /// Once cancellation has been requested every failure is a consequence of
    /// teardown and the call ends cleanly. Otherwise the failure is fatal.
    pub fn classify<E>(&self, err: E) -> Result<StreamOutcome, E> {
        if self.token.is_cancelled() {
            Ok(StreamOutcome::Cancelled)
        } else {
            Err(err)
        }
    }
}

impl From<CancellationToken> for Cancellation {
    fn from(token: CancellationToken) -> Self {
        Self::new(token)
    }
}

/// Cancel `token` once `after` has elapsed, unless it is cancelled earlier.
pub fn cancel_after(token: CancellationToken, after: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            () = token.cancelled() => {}
            () = tokio::time::sleep(after) => {
                tracing::debug!(after_ms = after.as_millis() as u64, "Stream deadline reached");
                token.cancel();
            }
        }
    })
}
