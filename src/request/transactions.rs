use super::{count_params, non_empty, Endpoint, Order, QueryParams, StreamRequest};
use crate::error::{BuildError, StreamError};
use crate::records::{Record, Transaction};

/// Transactions request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionRequest {
    pub for_account: Option<String>,
    pub for_ledger: Option<u32>,
    pub for_transaction: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub order: Option<Order>,
    pub include_failed: bool,
}

impl TransactionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request for a single transaction by hash.
    pub fn detail(hash: impl Into<String>) -> Self {
        Self {
            for_transaction: Some(hash.into()),
            ..Self::default()
        }
    }
}

impl Endpoint for TransactionRequest {
    fn path(&self) -> Result<String, BuildError> {
        let account = non_empty(&self.for_account);
        let ledger = self.for_ledger.filter(|l| *l > 0);
        let hash = non_empty(&self.for_transaction);

        if count_params(&[account.is_some(), ledger.is_some(), hash.is_some()]) > 1 {
            return Err(BuildError::TooManyParameters);
        }

        let path = match (account, ledger, hash) {
            (Some(account), ..) => format!("accounts/{}/transactions", account),
            (_, Some(ledger), _) => format!("ledgers/{}/transactions", ledger),
            (_, _, Some(hash)) => format!("transactions/{}", hash),
            _ => "transactions".to_string(),
        };
        Ok(path)
    }

    fn query(&self) -> QueryParams {
        QueryParams {
            cursor: self.cursor.clone(),
            limit: self.limit,
            order: self.order,
            include_failed: self.include_failed,
        }
    }
}

impl StreamRequest for TransactionRequest {
    fn decode(&self, payload: &[u8]) -> Result<Record, StreamError> {
        serde_json::from_slice::<Transaction>(payload)
            .map(Record::Transaction)
            .map_err(StreamError::Envelope)
    }
}
