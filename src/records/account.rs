//! Account state and transaction submission results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{deserialize_id, Links};

/// Signature thresholds of an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub low_threshold: u8,
    pub med_threshold: u8,
    pub high_threshold: u8,
}

/// Authorization flags of an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub auth_required: bool,
    #[serde(default)]
    pub auth_revocable: bool,
    #[serde(default)]
    pub auth_immutable: bool,
}

/// One balance line: the native balance or a trustline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub balance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default)]
    pub buying_liabilities: String,
    #[serde(default)]
    pub selling_liabilities: String,
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub weight: i32,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Current state of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_links", default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    pub id: String,
    pub account_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub sequence: String,
    pub subentry_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_domain: Option<String>,
    #[serde(default)]
    pub last_modified_ledger: u32,
    pub thresholds: Thresholds,
    pub flags: Flags,
    pub balances: Vec<Balance>,
    #[serde(default)]
    pub signers: Vec<Signer>,
    /// Data entries, base64 values keyed by name
    #[serde(default)]
    pub data: HashMap<String, String>,
    #[serde(default)]
    pub paging_token: String,
}

impl Account {
    /// Native (lumen) balance, if reported.
    pub fn native_balance(&self) -> Option<&str> {
        self.balances
            .iter()
            .find(|b| b.asset_type == "native")
            .map(|b| b.balance.as_str())
    }
}

/// Result of a successful transaction submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSuccess {
    #[serde(rename = "_links", default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    pub hash: String,
    pub ledger: u32,
    #[serde(rename = "envelope_xdr")]
    pub envelope: String,
    #[serde(rename = "result_xdr")]
    pub result: String,
    #[serde(rename = "result_meta_xdr", default)]
    pub meta: String,
}
