//! Streaming-related error types.
//!
//! This module defines the errors that end a streaming call: transport
//! failures, bad statuses, framing failures and payload decode failures.
//! Cancellation is not an error and has no variant here.

use crate::sse::FrameError;
use crate::traits::HttpError;

/// A payload could not be turned into a concrete record.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The discriminant names a record kind with no registered decoder.
    #[error("unknown record type: {0}")]
    UnknownType(String),

    /// The payload does not match the shape of its record kind.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Fatal errors of a streaming call.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The connection could not be opened.
    #[error("Error connecting to stream: {0}")]
    Transport(HttpError),

    /// The server answered the stream request with a non-2xx status.
    #[error("Got bad HTTP status code {status}")]
    BadStatus {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The body failed or was cut while framing.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// The payload is not a JSON object carrying a discriminant.
    #[error("Error unmarshaling data: {0}")]
    Envelope(serde_json::Error),

    /// The discriminant could not be resolved to a concrete record.
    #[error("Unmarshaling to the correct {kind} type: {source}")]
    Dispatch {
        /// Record family being decoded (`operation`, `effect`).
        kind: &'static str,
        /// Underlying decode failure.
        source: DecodeError,
    },
}

impl StreamError {
    /// Check if this error is likely transient, so re-opening the stream
    /// from the last paging token could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            StreamError::Transport(e) => e.is_transient(),
            StreamError::BadStatus { status } => *status == 429 || *status >= 500,
            StreamError::Frame(FrameError::Read(e)) => e.is_transient(),
            StreamError::Frame(FrameError::Truncated) => true,
            StreamError::Frame(FrameError::LineTooLong { .. }) => false,
            StreamError::Envelope(_) | StreamError::Dispatch { .. } => false,
        }
    }

    /// HTTP status code, when the error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            StreamError::BadStatus { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
    }

    #[test]
    fn test_bad_status_message() {
        let err = StreamError::BadStatus { status: 500 };
        assert_eq!(err.to_string(), "Got bad HTTP status code 500");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_decode_stage_messages() {
        let envelope = StreamError::Envelope(json_error());
        assert!(envelope.to_string().starts_with("Error unmarshaling data: "));

        let dispatch = StreamError::Dispatch {
            kind: "operation",
            source: DecodeError::UnknownType("teleport".to_string()),
        };
        assert_eq!(
            dispatch.to_string(),
            "Unmarshaling to the correct operation type: unknown record type: teleport"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(StreamError::BadStatus { status: 503 }.is_retryable());
        assert!(StreamError::BadStatus { status: 429 }.is_retryable());
        assert!(!StreamError::BadStatus { status: 404 }.is_retryable());
        assert!(StreamError::Transport(HttpError::ConnectionFailed("x".to_string())).is_retryable());
        assert!(StreamError::Frame(FrameError::Truncated).is_retryable());
        assert!(!StreamError::Frame(FrameError::LineTooLong { limit: 16 }).is_retryable());
        assert!(!StreamError::Envelope(json_error()).is_retryable());
    }
}
