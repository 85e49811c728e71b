//! Horizon client - streaming and REST access to a Horizon ledger API
//!
//! The streaming side reads server-sent events off a long-lived HTTP
//! response, frames them, decodes each payload into a typed record and
//! hands it to a caller-supplied handler until a cancellation token fires
//! or the server closes the stream.
//!
//! ```no_run
//! use horizon_client::{CancellationToken, HorizonClient};
//! use horizon_client::request::EffectRequest;
//!
//! # async fn run() -> horizon_client::HorizonResult<()> {
//! let client = HorizonClient::default_test_net()?;
//! let cancel = CancellationToken::new();
//! client
//!     .stream_effects(&EffectRequest::new(), cancel, |effect| {
//!         println!("{} {}", effect.kind(), effect.paging_token());
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod records;
pub mod request;
pub mod sse;
pub mod stream;
pub mod traits;

pub use client::HorizonClient;
pub use config::ClientConfig;
pub use error::{HorizonError, HorizonResult, StreamError};
pub use records::Record;
pub use stream::{cancel_after, CancellationToken, StreamOutcome};
