//! URL building through the public request descriptors.

use horizon_client::error::BuildError;
use horizon_client::request::{
    resolve, AccountRequest, EffectRequest, Endpoint, LedgerRequest, OperationRequest, Order,
    SubmitRequest, TransactionRequest,
};

const ACCOUNT: &str = "GBNZN27NAOHRJRCMHQF2ZN2F6TAPVEWKJIGZIRNKIADWIS2HDENIS6CI";

#[test]
fn test_stream_urls_default_to_now() {
    let effects = EffectRequest::for_account(ACCOUNT);
    assert_eq!(
        effects.stream_url("now").unwrap(),
        format!("accounts/{}/effects?cursor=now", ACCOUNT)
    );

    let mut payments = OperationRequest::new();
    payments.set_payments_endpoint();
    assert_eq!(payments.stream_url("now").unwrap(), "payments?cursor=now");

    let ledgers = LedgerRequest {
        cursor: Some("300042120331264".to_string()),
        ..Default::default()
    };
    assert_eq!(ledgers.stream_url("now").unwrap(), "ledgers?cursor=300042120331264");
}

#[test]
fn test_transactions_for_ledger_with_failed() {
    let request = TransactionRequest {
        for_ledger: Some(69859),
        limit: Some(10),
        order: Some(Order::Desc),
        include_failed: true,
        ..Default::default()
    };
    assert_eq!(
        request.build_url().unwrap(),
        "ledgers/69859/transactions?limit=10&order=desc&include_failed=true"
    );
}

#[test]
fn test_conflicting_filters_fail_before_io() {
    let request = EffectRequest {
        for_account: Some(ACCOUNT.to_string()),
        for_ledger: Some(1),
        ..Default::default()
    };
    assert_eq!(request.build_url(), Err(BuildError::TooManyParameters));
    assert_eq!(request.stream_url("now"), Err(BuildError::TooManyParameters));
}

#[test]
fn test_required_filters() {
    assert_eq!(AccountRequest::default().build_url(), Err(BuildError::TooFewParameters));
    assert_eq!(SubmitRequest::new("").build_url(), Err(BuildError::TooFewParameters));
    assert_eq!(
        AccountRequest::new(ACCOUNT).build_url().unwrap(),
        format!("accounts/{}", ACCOUNT)
    );
}

#[test]
fn test_resolve_against_base() {
    let url = resolve("https://horizon-testnet.stellar.org/", "effects?cursor=now").unwrap();
    assert_eq!(url.as_str(), "https://horizon-testnet.stellar.org/effects?cursor=now");

    assert!(matches!(
        resolve("not a url", "effects"),
        Err(BuildError::InvalidUrl(_))
    ));
}
