//! Error handling for the Horizon client.
//!
//! Errors are layered by where they can happen:
//!
//! | Type | Raised by | When |
//! |------|-----------|------|
//! | [`BuildError`] | request descriptors | before any I/O |
//! | [`StreamError`] | stream session | fatal end of a streaming call |
//! | [`DecodeError`] | record registries | unknown or malformed record |
//! | [`HorizonError`] | client facade | wraps all of the above |
//!
//! Cancelling a stream is not an error; the call returns `Ok(())`.

mod horizon;
mod request;
mod stream;

pub use horizon::{HorizonError, Problem};
pub use request::BuildError;
pub use stream::{DecodeError, StreamError};

/// Result type alias for client operations.
pub type HorizonResult<T> = Result<T, HorizonError>;
