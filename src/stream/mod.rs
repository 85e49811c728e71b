//! Streaming engine.
//!
//! [`StreamSession`] drives one streaming call; [`Cancellation`] decides how
//! it ends once the caller's token fires.

pub mod cancellation;
pub mod session;

pub use cancellation::{cancel_after, Cancellation, StreamOutcome};
pub use session::StreamSession;
pub use tokio_util::sync::CancellationToken;
