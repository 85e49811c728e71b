//! Operation records.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::registry::Registry;
use super::{deserialize_id, Asset, Links};
use crate::error::StreamError;

/// Fields shared by every operation kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationBase {
    #[serde(rename = "_links", default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    pub id: String,
    pub paging_token: String,
    #[serde(default = "default_true")]
    pub transaction_successful: bool,
    pub source_account: String,
    /// Discriminant, e.g. `create_account`
    #[serde(rename = "type")]
    pub kind: String,
    pub type_i: i32,
    pub created_at: DateTime<Utc>,
    pub transaction_hash: String,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAccount {
    #[serde(flatten)]
    pub base: OperationBase,
    pub starting_balance: String,
    pub funder: String,
    pub account: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(flatten)]
    pub base: OperationBase,
    #[serde(flatten)]
    pub asset: Asset,
    pub from: String,
    pub to: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPayment {
    #[serde(flatten)]
    pub base: OperationBase,
    #[serde(flatten)]
    pub asset: Asset,
    pub from: String,
    pub to: String,
    pub amount: String,
    #[serde(default)]
    pub path: Vec<Asset>,
    #[serde(default)]
    pub source_amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_max: Option<String>,
    pub source_asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_asset_issuer: Option<String>,
}

/// Rational price as numerator and denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManageOffer {
    #[serde(flatten)]
    pub base: OperationBase,
    #[serde(deserialize_with = "deserialize_id")]
    pub offer_id: String,
    pub amount: String,
    pub price: String,
    pub price_r: Price,
    pub buying_asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buying_asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buying_asset_issuer: Option<String>,
    pub selling_asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_asset_issuer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePassiveOffer {
    #[serde(flatten)]
    pub base: OperationBase,
    pub amount: String,
    pub price: String,
    pub price_r: Price,
    pub buying_asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buying_asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buying_asset_issuer: Option<String>,
    pub selling_asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_asset_issuer: Option<String>,
}

/// Account option changes. Every field is optional; only the options the
/// operation touched are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetOptions {
    #[serde(flatten)]
    pub base: OperationBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_dest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_key_weight: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_weight: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub set_flags: Vec<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub set_flags_s: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clear_flags: Vec<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clear_flags_s: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_threshold: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub med_threshold: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_threshold: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeTrust {
    #[serde(flatten)]
    pub base: OperationBase,
    #[serde(flatten)]
    pub asset: Asset,
    pub limit: String,
    pub trustee: String,
    pub trustor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowTrust {
    #[serde(flatten)]
    pub base: OperationBase,
    #[serde(flatten)]
    pub asset: Asset,
    pub trustee: String,
    pub trustor: String,
    pub authorize: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountMerge {
    #[serde(flatten)]
    pub base: OperationBase,
    pub account: String,
    pub into: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManageData {
    #[serde(flatten)]
    pub base: OperationBase,
    pub name: String,
    /// Base64 value; empty when the entry was removed
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BumpSequence {
    #[serde(flatten)]
    pub base: OperationBase,
    #[serde(deserialize_with = "deserialize_id")]
    pub bump_to: String,
}

/// An operation of any kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operation {
    CreateAccount(CreateAccount),
    Payment(Payment),
    PathPayment(PathPayment),
    ManageOffer(ManageOffer),
    CreatePassiveOffer(CreatePassiveOffer),
    SetOptions(SetOptions),
    ChangeTrust(ChangeTrust),
    AllowTrust(AllowTrust),
    AccountMerge(AccountMerge),
    Inflation(OperationBase),
    ManageData(ManageData),
    BumpSequence(BumpSequence),
}

impl Operation {
    pub fn base(&self) -> &OperationBase {
        match self {
            Operation::CreateAccount(op) => &op.base,
            Operation::Payment(op) => &op.base,
            Operation::PathPayment(op) => &op.base,
            Operation::ManageOffer(op) => &op.base,
            Operation::CreatePassiveOffer(op) => &op.base,
            Operation::SetOptions(op) => &op.base,
            Operation::ChangeTrust(op) => &op.base,
            Operation::AllowTrust(op) => &op.base,
            Operation::AccountMerge(op) => &op.base,
            Operation::Inflation(base) => base,
            Operation::ManageData(op) => &op.base,
            Operation::BumpSequence(op) => &op.base,
        }
    }

    /// Discriminant as sent by the server.
    pub fn kind(&self) -> &str {
        &self.base().kind
    }

    pub fn paging_token(&self) -> &str {
        &self.base().paging_token
    }
}

/// Decoders for every operation kind. Later protocol names of renamed
/// operations decode to the same variants.
pub static OPERATIONS: Lazy<Registry<Operation>> = Lazy::new(|| {
    let mut registry: Registry<Operation> = Registry::new("operation");
    registry
        .register("create_account", |b| {
            serde_json::from_slice(b).map(Operation::CreateAccount)
        })
        .register("payment", |b| serde_json::from_slice(b).map(Operation::Payment))
        .register("path_payment", |b| {
            serde_json::from_slice(b).map(Operation::PathPayment)
        })
        .register("path_payment_strict_receive", |b| {
            serde_json::from_slice(b).map(Operation::PathPayment)
        })
        .register("manage_offer", |b| {
            serde_json::from_slice(b).map(Operation::ManageOffer)
        })
        .register("manage_sell_offer", |b| {
            serde_json::from_slice(b).map(Operation::ManageOffer)
        })
        .register("manage_buy_offer", |b| {
            serde_json::from_slice(b).map(Operation::ManageOffer)
        })
        .register("create_passive_offer", |b| {
            serde_json::from_slice(b).map(Operation::CreatePassiveOffer)
        })
        .register("create_passive_sell_offer", |b| {
            serde_json::from_slice(b).map(Operation::CreatePassiveOffer)
        })
        .register("set_options", |b| {
            serde_json::from_slice(b).map(Operation::SetOptions)
        })
        .register("change_trust", |b| {
            serde_json::from_slice(b).map(Operation::ChangeTrust)
        })
        .register("allow_trust", |b| {
            serde_json::from_slice(b).map(Operation::AllowTrust)
        })
        .register("account_merge", |b| {
            serde_json::from_slice(b).map(Operation::AccountMerge)
        })
        .register("inflation", |b| serde_json::from_slice(b).map(Operation::Inflation))
        .register("manage_data", |b| {
            serde_json::from_slice(b).map(Operation::ManageData)
        })
        .register("bump_sequence", |b| {
            serde_json::from_slice(b).map(Operation::BumpSequence)
        });
    registry
});

/// Decode one streamed operation payload.
pub fn decode_operation(payload: &[u8]) -> Result<Operation, StreamError> {
    OPERATIONS.decode(payload)
}
