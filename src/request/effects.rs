use super::{count_params, non_empty, Endpoint, Order, QueryParams, StreamRequest};
use crate::error::{BuildError, StreamError};
use crate::records::{decode_effect, Record};

/// Effects request.
///
/// At most one identifying filter may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectRequest {
    pub for_account: Option<String>,
    pub for_ledger: Option<u32>,
    pub for_operation: Option<String>,
    pub for_transaction: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub order: Option<Order>,
}

impl EffectRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects of one account.
    pub fn for_account(account: impl Into<String>) -> Self {
        Self {
            for_account: Some(account.into()),
            ..Self::default()
        }
    }
}

impl Endpoint for EffectRequest {
    fn path(&self) -> Result<String, BuildError> {
        let account = non_empty(&self.for_account);
        let ledger = self.for_ledger.filter(|l| *l > 0);
        let operation = non_empty(&self.for_operation);
        let transaction = non_empty(&self.for_transaction);

        if count_params(&[
            account.is_some(),
            ledger.is_some(),
            operation.is_some(),
            transaction.is_some(),
        ]) > 1
        {
            return Err(BuildError::TooManyParameters);
        }

        let path = match (account, ledger, operation, transaction) {
            (Some(account), ..) => format!("accounts/{}/effects", account),
            (_, Some(ledger), ..) => format!("ledgers/{}/effects", ledger),
            (_, _, Some(id), _) => format!("operations/{}/effects", id),
            (_, _, _, Some(hash)) => format!("transactions/{}/effects", hash),
            _ => "effects".to_string(),
        };
        Ok(path)
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

impl StreamRequest for EffectRequest {
    fn decode(&self, payload: &[u8]) -> Result<Record, StreamError> {
        decode_effect(payload).map(Record::Effect)
    }
}
