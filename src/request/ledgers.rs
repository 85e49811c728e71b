use super::{Endpoint, Order, QueryParams, StreamRequest};
use crate::error::{BuildError, StreamError};
use crate::records::{Ledger, Record};

/// Ledgers request. With `for_sequence` set it names a single ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerRequest {
    pub for_sequence: Option<u32>,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub order: Option<Order>,
}

impl LedgerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detail(sequence: u32) -> Self {
        Self {
            for_sequence: Some(sequence),
            ..Self::default()
        }
    }
}

impl Endpoint for LedgerRequest {
    fn path(&self) -> Result<String, BuildError> {
        Ok(match self.for_sequence.filter(|s| *s > 0) {
            Some(sequence) => format!("ledgers/{}", sequence),
            None => "ledgers".to_string(),
        })
    }

    fn query(&self) -> QueryParams {
        QueryParams {
            cursor: self.cursor.clone(),
            limit: self.limit,
            order: self.order,
            include_failed: false,
        }
    }
}

impl StreamRequest for LedgerRequest {
    fn decode(&self, payload: &[u8]) -> Result<Record, StreamError> {
        serde_json::from_slice::<Ledger>(payload)
            .map(Record::Ledger)
            .map_err(StreamError::Envelope)
    }
}
