use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_string, Links};

/// A transaction applied to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_links", default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    pub id: String,
    pub paging_token: String,
    #[serde(default = "default_true")]
    pub successful: bool,
    pub hash: String,
    pub ledger: u32,
    pub created_at: DateTime<Utc>,
    pub source_account: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub source_account_sequence: String,
    /// Fee in stroops, as reported by older servers
    #[serde(default, deserialize_with = "deserialize_id")]
    pub fee_paid: String,
    /// Fee in stroops, as reported by newer servers
    #[serde(default, deserialize_with = "deserialize_id")]
    pub fee_charged: String,
    pub operation_count: u32,
    #[serde(default)]
    pub envelope_xdr: String,
    #[serde(default)]
    pub result_xdr: String,
    #[serde(default)]
    pub result_meta_xdr: String,
    #[serde(default)]
    pub fee_meta_xdr: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub memo_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default)]
    pub signatures: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_before: Option<String>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_transaction() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "id": "5131aed266a639a6eb4802a92fba310454e711ded830ed899745b9e777d7110c",
                "paging_token": "36208387080077312",
                "hash": "5131aed266a639a6eb4802a92fba310454e711ded830ed899745b9e777d7110c",
                "ledger": 8430409,
                "created_at": "2019-04-03T10:14:17Z",
                "source_account": "GAIH3ULLFQ4DGSECF2AR555KZ4KNDGEKN4AFI4SU2M7B43MGK3QJZNSR",
                "source_account_sequence": "4660039994869",
                "fee_paid": 100,
                "operation_count": 1,
                "memo_type": "text",
                "memo": "hello",
                "signatures": ["sig"]
            }"#,
        )
        .unwrap();

        assert!(tx.successful);
        assert_eq!(tx.ledger, 8430409);
        assert_eq!(tx.fee_paid, "100");
        assert_eq!(tx.memo.as_deref(), Some("hello"));
    }

    #[test]
    fn test_fee_charged_and_null_memo_type() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id":"a","paging_token":"1","successful":false,"hash":"a","ledger":1,"created_at":"2019-04-03T10:14:17Z","source_account":"GA","source_account_sequence":12,"fee_charged":"200","operation_count":2,"memo_type":null}"#,
        )
        .unwrap();
        assert!(!tx.successful);
        assert_eq!(tx.fee_charged, "200");
        assert_eq!(tx.fee_paid, "");
        assert_eq!(tx.source_account_sequence, "12");
        assert_eq!(tx.memo_type, "");
    }
}
