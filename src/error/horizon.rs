//! Client-level error type.

use serde::{Deserialize, Serialize};

use super::request::BuildError;
use super::stream::{DecodeError, StreamError};
use crate::traits::HttpError;

/// Problem document returned by the service for failed requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// URL identifying the problem type.
    #[serde(rename = "type", default)]
    pub problem_type: String,
    /// Short human-readable summary.
    #[serde(default)]
    pub title: String,
    /// HTTP status code.
    #[serde(default)]
    pub status: u16,
    /// Longer explanation.
    #[serde(default)]
    pub detail: String,
    /// Problem-specific extra data, e.g. transaction result codes.
    #[serde(default)]
    pub extras: Option<serde_json::Value>,
}

/// Errors returned by [`HorizonClient`](crate::HorizonClient).
#[derive(Debug, thiserror::Error)]
pub enum HorizonError {
    /// The request descriptor could not be turned into a URL.
    #[error("Unable to build endpoint: {0}")]
    Build(#[from] BuildError),

    /// A streaming call ended with a fatal error.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A response body could not be decoded.
    #[error("Error unmarshaling data: {0}")]
    Json(#[from] serde_json::Error),

    /// A record in a page could not be dispatched to its concrete type.
    #[error("Error decoding record: {0}")]
    Decode(#[from] DecodeError),

    /// The service rejected the request with a problem document.
    #[error("Horizon error ({}): {}", .0.status, .0.title)]
    Problem(Problem),

    /// The service returned a non-2xx status without a problem document.
    #[error("Got bad HTTP status code {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        message: String,
    },
}

impl HorizonError {
    /// HTTP status code, when the error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HorizonError::Problem(problem) => Some(problem.status),
            HorizonError::Status { status, .. } => Some(*status),
            HorizonError::Stream(err) => err.status(),
            _ => None,
        }
    }

    /// Whether the error is a missing resource.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
