//! Discriminant registries.
//!
//! A registry maps the `type` discriminant of a record family to the decoder
//! for its concrete shape. Decoding is two-staged: the payload is first read
//! as an envelope carrying only the discriminant, then the same bytes are
//! decoded again by the registered decoder.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{DecodeError, StreamError};

/// Decoder for one concrete record shape.
pub type Decoder<T> = fn(&[u8]) -> Result<T, serde_json::Error>;

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
}

/// Decoders for one record family, keyed by discriminant.
pub struct Registry<T> {
    family: &'static str,
    decoders: HashMap<&'static str, Decoder<T>>,
}

impl<T> Registry<T> {
    /// Create an empty registry for the named family (`operation`, `effect`).
    pub fn new(family: &'static str) -> Self {
        Self {
            family,
            decoders: HashMap::new(),
        }
    }

    /// Register the decoder for a discriminant.
    pub fn register(&mut self, discriminant: &'static str, decoder: Decoder<T>) -> &mut Self {
        self.decoders.insert(discriminant, decoder);
        self
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn contains(&self, discriminant: &str) -> bool {
        self.decoders.contains_key(discriminant)
    }

    /// Decode `payload` as the shape registered for `discriminant`.
    pub fn decode_as(&self, discriminant: &str, payload: &[u8]) -> Result<T, DecodeError> {
        let decoder = self
            .decoders
            .get(discriminant)
            .ok_or_else(|| DecodeError::UnknownType(discriminant.to_string()))?;
        Ok(decoder(payload)?)
    }

    /// Decode a streamed payload.
    ///
    /// A payload that is not an object with a `type` string fails with
    /// [`StreamError::Envelope`]; an unknown or mismatched shape fails with
    /// [`StreamError::Dispatch`].
    pub fn decode(&self, payload: &[u8]) -> Result<T, StreamError> {
        let envelope: Envelope = serde_json::from_slice(payload).map_err(StreamError::Envelope)?;
        self.decode_as(&envelope.kind, payload)
            .map_err(|source| StreamError::Dispatch {
                kind: self.family,
                source,
            })
    }

    /// Decode one record of a fetched page.
    pub fn decode_raw(&self, raw: &RawValue) -> Result<T, DecodeError> {
        let payload = raw.get().as_bytes();
        let envelope: Envelope = serde_json::from_slice(payload)?;
        self.decode_as(&envelope.kind, payload)
    }
}
