//! Common fixtures for integration tests.
//!
//! Payloads are captured from the test network and served the way Horizon
//! serves them: one `data:` line per event.

#![allow(dead_code)]

use horizon_client::{ClientConfig, HorizonClient};
use wiremock::MockServer;

pub const ACCOUNT: &str = "GBNZN27NAOHRJRCMHQF2ZN2F6TAPVEWKJIGZIRNKIADWIS2HDENIS6CI";

pub const EFFECT_PAYLOAD: &str = r#"{"_links":{"operation":{"href":"https://horizon-testnet.stellar.org/operations/2531135896703017"},"succeeds":{"href":"https://horizon-testnet.stellar.org/effects?order=desc&cursor=2531135896703017-1"},"precedes":{"href":"https://horizon-testnet.stellar.org/effects?order=asc&cursor=2531135896703017-1"}},"id":"0002531135896703017-0000000001","paging_token":"2531135896703017-1","account":"GBNZN27NAOHRJRCMHQF2ZN2F6TAPVEWKJIGZIRNKIADWIS2HDENIS6CI","type":"account_credited","type_i":2,"created_at":"2019-04-03T10:14:17Z","asset_type":"credit_alphanum4","asset_code":"qwop","asset_issuer":"GBM4HXXNDBWWQBXOL4QCTZIUQAP6XFUI3FPINUGUPBMULMTEHJPIKX6T","amount":"0.0460000"}"#;

pub const OPERATION_PAYLOAD: &str = r#"{"_links":{"self":{"href":"https://horizon-testnet.stellar.org/operations/4934917427201"},"transaction":{"href":"https://horizon-testnet.stellar.org/transactions/1c1449106a54cccd8a2ec2094815ad9db30ae54c69c3309dd08d13fdb8c749de"},"effects":{"href":"https://horizon-testnet.stellar.org/operations/4934917427201/effects"},"succeeds":{"href":"https://horizon-testnet.stellar.org/effects?order=desc&cursor=4934917427201"},"precedes":{"href":"https://horizon-testnet.stellar.org/effects?order=asc&cursor=4934917427201"}},"id":"4934917427201","paging_token":"4934917427201","transaction_successful":true,"source_account":"GAIH3ULLFQ4DGSECF2AR555KZ4KNDGEKN4AFI4SU2M7B43MGK3QJZNSR","type":"create_account","type_i":0,"created_at":"2019-02-27T11:32:39Z","transaction_hash":"1c1449106a54cccd8a2ec2094815ad9db30ae54c69c3309dd08d13fdb8c749de","starting_balance":"10000.0000000","funder":"GAIH3ULLFQ4DGSECF2AR555KZ4KNDGEKN4AFI4SU2M7B43MGK3QJZNSR","account":"GDBLBBDIUULY3HGIKXNK6WVBISY7DCNCDA45EL7NTXWX5R4UZ26HGMGS"}"#;

pub const LEDGER_PAYLOAD: &str = r#"{"_links":{"self":{"href":"https://horizon-testnet.stellar.org/ledgers/69859"}},"id":"71a40c0581d8d7c1158e1d9368024c5f9fd70de17a8d277cdd96781590cc10fb","paging_token":"300042120331264","hash":"71a40c0581d8d7c1158e1d9368024c5f9fd70de17a8d277cdd96781590cc10fb","prev_hash":"78979bed15463bfc3b0c1915acc6aec866565d70ba6565ebca9f0e2ecbba3ce1","sequence":69859,"successful_transaction_count":0,"failed_transaction_count":0,"operation_count":0,"closed_at":"2019-04-01T16:47:05Z","total_coins":"100000000000.0000000","fee_pool":"10.7338093","base_fee_in_stroops":100,"base_reserve_in_stroops":5000000,"max_tx_set_size":100,"protocol_version":10,"header_xdr":"AAAACg=="}"#;

/// One event per payload, newline-terminated, without a trailing blank line.
pub fn event_stream(payloads: &[&str]) -> String {
    payloads
        .iter()
        .map(|payload| format!("data: {}\n", payload))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> HorizonClient {
    let config = ClientConfig::new().with_horizon_url(server.uri());
    HorizonClient::new(config).expect("client builds")
}
