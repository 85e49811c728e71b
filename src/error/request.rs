//! Errors raised while building request URLs.
//!
//! These are reported before any I/O happens and never reach a stream.

/// A request descriptor could not be turned into a URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// More than one mutually exclusive filter was set.
    #[error("Invalid request. Too many parameters")]
    TooManyParameters,

    /// A required filter was missing.
    #[error("Invalid request. Too few parameters")]
    TooFewParameters,

    /// The endpoint could not be joined with the base URL.
    #[error("failed to parse endpoint: {0}")]
    InvalidUrl(String),
}
