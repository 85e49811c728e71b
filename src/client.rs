//! Horizon client facade.
//!
//! [`HorizonClient`] ties request descriptors, the transport and the
//! streaming engine together. REST calls return typed records or pages;
//! streaming calls hand every received record to a handler until the
//! caller's [`CancellationToken`] fires.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use tokio_util::sync::CancellationToken;

use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::error::{HorizonError, HorizonResult, Problem, StreamError};
use crate::records::{
    decode_effect, decode_operation, Account, Effect, Ledger, Operation, Page, Record,
    Transaction, TransactionSuccess, EFFECTS, OPERATIONS,
};
use crate::request::{
    resolve, AccountRequest, EffectRequest, Endpoint, LedgerRequest, OperationRequest,
    StreamRequest, SubmitRequest, TransactionRequest, CURSOR_NOW,
};
use crate::stream::StreamSession;
use crate::traits::{Headers, HttpClient, Response};

/// Client for a Horizon instance.
///
/// The transport is shared behind an [`Arc`], so cloning the client is cheap
/// and many streams can run concurrently from one client.
pub struct HorizonClient<C: HttpClient = ReqwestHttpClient> {
    http: Arc<C>,
    config: ClientConfig,
}

impl HorizonClient<ReqwestHttpClient> {
    /// Create a client backed by reqwest.
    pub fn new(config: ClientConfig) -> HorizonResult<Self> {
        let http = ReqwestHttpClient::from_config(&config)?;
        Ok(Self::with_http(config, http))
    }

    /// Client for the public network.
    pub fn default_public_net() -> HorizonResult<Self> {
        Self::new(ClientConfig::default())
    }

    /// Client for the test network.
    pub fn default_test_net() -> HorizonResult<Self> {
        Self::new(ClientConfig::test_net())
    }
}

impl<C: HttpClient> HorizonClient<C> {
    /// Create a client with a custom transport.
    pub fn with_http(config: ClientConfig, http: C) -> Self {
        Self {
            http: Arc::new(http),
            config,
        }
    }

    /// Base URL of the Horizon instance, with a trailing slash.
    pub fn horizon_url(&self) -> &str {
        &self.config.horizon_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url_for(&self, endpoint: &str) -> HorizonResult<String> {
        Ok(resolve(self.horizon_url(), endpoint)?.to_string())
    }

    async fn get_response(&self, endpoint: &str) -> HorizonResult<Response> {
        let url = self.url_for(endpoint)?;
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!(url = %url, "GET");
        let response = self.http.get(&url, &headers).await?;
        if !response.is_success() {
            return Err(problem_error(&response));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> HorizonResult<T> {
        let response = self.get_response(endpoint).await?;
        Ok(response.json()?)
    }

    /// List operations (or payments).
    ///
    /// For a single operation use [`operation_detail`](Self::operation_detail).
    pub async fn operations(&self, request: &OperationRequest) -> HorizonResult<Page<Operation>> {
        let page: Page<Box<RawValue>> = self.get_json(&request.build_url()?).await?;
        Ok(page.try_map(|raw| OPERATIONS.decode_raw(&raw))?)
    }

    /// Fetch one operation by id.
    pub async fn operation_detail(&self, id: &str) -> HorizonResult<Operation> {
        let raw: Box<RawValue> = self
            .get_json(&OperationRequest::detail(id).build_url()?)
            .await?;
        Ok(OPERATIONS.decode_raw(&raw)?)
    }

    /// List effects.
    pub async fn effects(&self, request: &EffectRequest) -> HorizonResult<Page<Effect>> {
        let page: Page<Box<RawValue>> = self.get_json(&request.build_url()?).await?;
        Ok(page.try_map(|raw| EFFECTS.decode_raw(&raw))?)
    }

    /// List transactions.
    pub async fn transactions(
        &self,
        request: &TransactionRequest,
    ) -> HorizonResult<Page<Transaction>> {
        self.get_json(&request.build_url()?).await
    }

    /// Fetch one transaction by hash.
    pub async fn transaction_detail(&self, hash: &str) -> HorizonResult<Transaction> {
        self.get_json(&TransactionRequest::detail(hash).build_url()?)
            .await
    }

    /// List ledgers.
    pub async fn ledgers(&self, request: &LedgerRequest) -> HorizonResult<Page<Ledger>> {
        self.get_json(&request.build_url()?).await
    }

    /// Fetch one ledger by sequence number.
    pub async fn ledger_detail(&self, sequence: u32) -> HorizonResult<Ledger> {
        self.get_json(&LedgerRequest::detail(sequence).build_url()?)
            .await
    }

    /// Fetch the current state of an account.
    pub async fn account_detail(&self, account_id: &str) -> HorizonResult<Account> {
        self.get_json(&AccountRequest::new(account_id).build_url()?)
            .await
    }

    /// Submit a signed transaction envelope (base64 XDR).
    ///
    /// A rejected transaction surfaces as [`HorizonError::Problem`], with the
    /// result codes in `extras`.
    pub async fn submit_transaction(&self, transaction_xdr: &str) -> HorizonResult<TransactionSuccess> {
        let url = self.url_for(&SubmitRequest::new(transaction_xdr).build_url()?)?;
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );

        tracing::info!("Submitting transaction");
        let response = self.http.post(&url, "", &headers).await?;
        if !response.is_success() {
            let err = problem_error(&response);
            tracing::warn!(error = %err, "Transaction submission failed");
            return Err(err);
        }
        Ok(response.json()?)
    }

    /// Stream records of any streamable resource.
    ///
    /// The stream starts at the request's cursor, or at `now` when none is
    /// set. `handler` is invoked once per record, in order. Returns `Ok(())`
    /// once `cancel` fires or the server closes the stream.
    pub async fn stream<R, H>(
        &self,
        request: &R,
        cancel: CancellationToken,
        handler: H,
    ) -> HorizonResult<()>
    where
        R: StreamRequest + Sync,
        H: FnMut(Record) + Send,
    {
        self.stream_with(request, cancel, |payload| request.decode(payload), handler)
            .await
    }

    /// Stream operations (or payments).
    pub async fn stream_operations<H>(
        &self,
        request: &OperationRequest,
        cancel: CancellationToken,
        handler: H,
    ) -> HorizonResult<()>
    where
        H: FnMut(Operation) + Send,
    {
        self.stream_with(request, cancel, decode_operation, handler)
            .await
    }

    /// Stream effects.
    pub async fn stream_effects<H>(
        &self,
        request: &EffectRequest,
        cancel: CancellationToken,
        handler: H,
    ) -> HorizonResult<()>
    where
        H: FnMut(Effect) + Send,
    {
        self.stream_with(request, cancel, decode_effect, handler).await
    }

    /// Stream transactions.
    pub async fn stream_transactions<H>(
        &self,
        request: &TransactionRequest,
        cancel: CancellationToken,
        handler: H,
    ) -> HorizonResult<()>
    where
        H: FnMut(Transaction) + Send,
    {
        self.stream_with(request, cancel, decode_plain::<Transaction>, handler)
            .await
    }

    /// Stream ledgers.
    pub async fn stream_ledgers<H>(
        &self,
        request: &LedgerRequest,
        cancel: CancellationToken,
        handler: H,
    ) -> HorizonResult<()>
    where
        H: FnMut(Ledger) + Send,
    {
        self.stream_with(request, cancel, decode_plain::<Ledger>, handler)
            .await
    }

    async fn stream_with<E, T, D, H>(
        &self,
        endpoint: &E,
        cancel: CancellationToken,
        decode: D,
        mut handler: H,
    ) -> HorizonResult<()>
    where
        E: Endpoint + ?Sized,
        D: Fn(&[u8]) -> Result<T, StreamError> + Sync,
        H: FnMut(T) + Send,
    {
        let url = self.url_for(&endpoint.stream_url(CURSOR_NOW)?)?;
        let session = StreamSession::new(Arc::clone(&self.http), url, cancel);
        session
            .run(|payload| {
                handler(decode(payload)?);
                Ok(())
            })
            .await?;
        Ok(())
    }
}

impl<C: HttpClient> Clone for HorizonClient<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            config: self.config.clone(),
        }
    }
}

impl<C: HttpClient> std::fmt::Debug for HorizonClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HorizonClient")
            .field("horizon_url", &self.config.horizon_url)
            .finish_non_exhaustive()
    }
}

fn decode_plain<T: DeserializeOwned>(payload: &[u8]) -> Result<T, StreamError> {
    serde_json::from_slice(payload).map_err(StreamError::Envelope)
}

/// Turn a non-2xx response into an error, preferring the problem document.
fn problem_error(response: &Response) -> HorizonError {
    match response.json::<Problem>() {
        Ok(problem) if problem.status != 0 || !problem.title.is_empty() => {
            HorizonError::Problem(problem)
        }
        _ => HorizonError::Status {
            status: response.status,
            message: String::from_utf8_lossy(&response.body).into_owned(),
        },
    }
}
