use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Links;

/// A closed ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(rename = "_links", default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    pub id: String,
    pub paging_token: String,
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_hash: Option<String>,
    pub sequence: u32,
    #[serde(default)]
    pub successful_transaction_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_transaction_count: Option<u32>,
    pub operation_count: u32,
    pub closed_at: DateTime<Utc>,
    pub total_coins: String,
    pub fee_pool: String,
    pub base_fee_in_stroops: u32,
    pub base_reserve_in_stroops: u32,
    pub max_tx_set_size: u32,
    pub protocol_version: u32,
    #[serde(default)]
    pub header_xdr: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ledger() {
        let ledger: Ledger = serde_json::from_str(
            r#"{
                "_links": {"self": {"href": "https://horizon-testnet.stellar.org/ledgers/69859"}},
                "id": "71a40c0581d8d7c1158e1d9368024c5f9fd70de17a8d277cdd96781590cc10fb",
                "paging_token": "300042120331264",
                "hash": "71a40c0581d8d7c1158e1d9368024c5f9fd70de17a8d277cdd96781590cc10fb",
                "prev_hash": "78979bed15463bfc3b0c1915acc6aec866565d70ba6b2ceab4ea2a17bb5a5ec4",
                "sequence": 69859,
                "successful_transaction_count": 0,
                "failed_transaction_count": 0,
                "operation_count": 0,
                "closed_at": "2019-03-03T13:38:16Z",
                "total_coins": "100000000000.0000000",
                "fee_pool": "10.7338093",
                "base_fee_in_stroops": 100,
                "base_reserve_in_stroops": 5000000,
                "max_tx_set_size": 100,
                "protocol_version": 10,
                "header_xdr": "AAAACg=="
            }"#,
        )
        .unwrap();

        assert_eq!(ledger.sequence, 69859);
        assert_eq!(ledger.failed_transaction_count, Some(0));
        assert_eq!(ledger.links["self"].href, "https://horizon-testnet.stellar.org/ledgers/69859");
    }

    #[test]
    fn test_optional_counts_default() {
        let ledger: Ledger = serde_json::from_str(
            r#"{"id":"h","paging_token":"1","hash":"h","sequence":2,"operation_count":9,"closed_at":"2019-03-03T13:38:16Z","total_coins":"1","fee_pool":"0","base_fee_in_stroops":100,"base_reserve_in_stroops":5000000,"max_tx_set_size":50,"protocol_version":10}"#,
        )
        .unwrap();
        assert_eq!(ledger.successful_transaction_count, 0);
        assert!(ledger.failed_transaction_count.is_none());
        assert!(ledger.prev_hash.is_none());
    }
}
