use super::{count_params, non_empty, Endpoint, Order, QueryParams, StreamRequest};
use crate::error::{BuildError, StreamError};
use crate::records::{decode_operation, Record};

/// Collection an [`OperationRequest`] lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperationsEndpoint {
    /// All operation kinds.
    #[default]
    Operations,
    /// Only payment-like operations.
    Payments,
}

impl OperationsEndpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationsEndpoint::Operations => "operations",
            OperationsEndpoint::Payments => "payments",
        }
    }
}

/// Operations (or payments) request.
///
/// At most one of `for_account`, `for_ledger`, `for_operation` and
/// `for_transaction` may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationRequest {
    pub for_account: Option<String>,
    pub for_ledger: Option<u32>,
    pub for_operation: Option<String>,
    pub for_transaction: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub order: Option<Order>,
    pub include_failed: bool,
    pub endpoint: OperationsEndpoint,
}

impl OperationRequest {
    /// Request for all operations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request for all payments.
    pub fn payments() -> Self {
        Self {
            endpoint: OperationsEndpoint::Payments,
            ..Self::default()
        }
    }

    /// Request for a single operation by id.
    pub fn detail(id: impl Into<String>) -> Self {
        Self {
            for_operation: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn set_payments_endpoint(&mut self) -> &mut Self {
        self.endpoint = OperationsEndpoint::Payments;
        self
    }

    pub fn set_operations_endpoint(&mut self) -> &mut Self {
        self.endpoint = OperationsEndpoint::Operations;
        self
    }
}

impl Endpoint for OperationRequest {
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

        let collection = self.endpoint.as_str();
        let path = match (account, ledger, operation, transaction) {
            (Some(account), ..) => format!("accounts/{}/{}", account, collection),
            (_, Some(ledger), ..) => format!("ledgers/{}/{}", ledger, collection),
            (_, _, Some(id), _) => format!("operations/{}", id),
            (_, _, _, Some(hash)) => format!("transactions/{}/{}", hash, collection),
            _ => collection.to_string(),
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

impl StreamRequest for OperationRequest {
    fn decode(&self, payload: &[u8]) -> Result<Record, StreamError> {
        decode_operation(payload).map(Record::Operation)
    }
}
