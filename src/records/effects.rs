//! Effect records.
//!
//! Effects are the ledger changes caused by an operation. Several kinds share
//! a payload shape (signer, trustline and data entry changes), so their
//! variants carry the same struct.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::registry::Registry;
use super::{deserialize_id, Asset, Links};
use crate::error::StreamError;

/// Fields shared by every effect kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectBase {
    #[serde(rename = "_links", default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    pub id: String,
    pub paging_token: String,
    pub account: String,
    /// Discriminant, e.g. `account_credited`
    #[serde(rename = "type")]
    pub kind: String,
    pub type_i: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCreated {
    #[serde(flatten)]
    pub base: EffectBase,
    pub starting_balance: String,
}

/// Balance change of an account (`account_credited`, `account_debited`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceChange {
    #[serde(flatten)]
    pub base: EffectBase,
    #[serde(flatten)]
    pub asset: Asset,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsUpdated {
    #[serde(flatten)]
    pub base: EffectBase,
    pub low_threshold: u8,
    pub med_threshold: u8,
    pub high_threshold: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeDomainUpdated {
    #[serde(flatten)]
    pub base: EffectBase,
    pub home_domain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagsUpdated {
    #[serde(flatten)]
    pub base: EffectBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_required_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_revokable_flag: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignerChange {
    #[serde(flatten)]
    pub base: EffectBase,
    pub weight: i32,
    pub public_key: String,
    #[serde(default)]
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustlineChange {
    #[serde(flatten)]
    pub base: EffectBase,
    #[serde(flatten)]
    pub asset: Asset,
    pub limit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustlineAuthorization {
    #[serde(flatten)]
    pub base: EffectBase,
    pub trustor: String,
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(flatten)]
    pub base: EffectBase,
    pub seller: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub offer_id: String,
    pub sold_amount: String,
    pub sold_asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_asset_issuer: Option<String>,
    pub bought_amount: String,
    pub bought_asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bought_asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bought_asset_issuer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntryChange {
    #[serde(flatten)]
    pub base: EffectBase,
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceBumped {
    #[serde(flatten)]
    pub base: EffectBase,
    #[serde(deserialize_with = "deserialize_id")]
    pub new_seq: String,
}

/// An effect of any kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Effect {
    AccountCreated(AccountCreated),
    AccountRemoved(EffectBase),
    AccountCredited(BalanceChange),
    AccountDebited(BalanceChange),
    AccountThresholdsUpdated(ThresholdsUpdated),
    AccountHomeDomainUpdated(HomeDomainUpdated),
    AccountFlagsUpdated(FlagsUpdated),
    AccountInflationDestinationUpdated(EffectBase),
    SignerCreated(SignerChange),
    SignerRemoved(SignerChange),
    SignerUpdated(SignerChange),
    TrustlineCreated(TrustlineChange),
    TrustlineRemoved(TrustlineChange),
    TrustlineUpdated(TrustlineChange),
    TrustlineAuthorized(TrustlineAuthorization),
    TrustlineDeauthorized(TrustlineAuthorization),
    Trade(Trade),
    DataCreated(DataEntryChange),
    DataRemoved(DataEntryChange),
    DataUpdated(DataEntryChange),
    SequenceBumped(SequenceBumped),
}

impl Effect {
    pub fn base(&self) -> &EffectBase {
        match self {
            Effect::AccountRemoved(base) | Effect::AccountInflationDestinationUpdated(base) => {
                base
            }
            Effect::AccountCreated(e) => &e.base,
            Effect::AccountCredited(e) | Effect::AccountDebited(e) => &e.base,
            Effect::AccountThresholdsUpdated(e) => &e.base,
            Effect::AccountHomeDomainUpdated(e) => &e.base,
            Effect::AccountFlagsUpdated(e) => &e.base,
            Effect::SignerCreated(e) | Effect::SignerRemoved(e) | Effect::SignerUpdated(e) => {
                &e.base
            }
            Effect::TrustlineCreated(e)
            | Effect::TrustlineRemoved(e)
            | Effect::TrustlineUpdated(e) => &e.base,
            Effect::TrustlineAuthorized(e) | Effect::TrustlineDeauthorized(e) => &e.base,
            Effect::Trade(e) => &e.base,
            Effect::DataCreated(e) | Effect::DataRemoved(e) | Effect::DataUpdated(e) => &e.base,
            Effect::SequenceBumped(e) => &e.base,
        }
    }

    /// Discriminant as sent by the server.
    pub fn kind(&self) -> &str {
        &self.base().kind
    }

    pub fn account(&self) -> &str {
        &self.base().account
    }

    pub fn paging_token(&self) -> &str {
        &self.base().paging_token
    }
}

/// Decoders for every effect kind.
pub static EFFECTS: Lazy<Registry<Effect>> = Lazy::new(|| {
    let mut registry: Registry<Effect> = Registry::new("effect");
    registry
        .register("account_created", |b| {
            serde_json::from_slice(b).map(Effect::AccountCreated)
        })
        .register("account_removed", |b| {
            serde_json::from_slice(b).map(Effect::AccountRemoved)
        })
        .register("account_credited", |b| {
            serde_json::from_slice(b).map(Effect::AccountCredited)
        })
        .register("account_debited", |b| {
            serde_json::from_slice(b).map(Effect::AccountDebited)
        })
        .register("account_thresholds_updated", |b| {
            serde_json::from_slice(b).map(Effect::AccountThresholdsUpdated)
        })
        .register("account_home_domain_updated", |b| {
            serde_json::from_slice(b).map(Effect::AccountHomeDomainUpdated)
        })
        .register("account_flags_updated", |b| {
            serde_json::from_slice(b).map(Effect::AccountFlagsUpdated)
        })
        .register("account_inflation_destination_updated", |b| {
            serde_json::from_slice(b).map(Effect::AccountInflationDestinationUpdated)
        })
        .register("signer_created", |b| {
            serde_json::from_slice(b).map(Effect::SignerCreated)
        })
        .register("signer_removed", |b| {
            serde_json::from_slice(b).map(Effect::SignerRemoved)
        })
        .register("signer_updated", |b| {
            serde_json::from_slice(b).map(Effect::SignerUpdated)
        })
        .register("trustline_created", |b| {
            serde_json::from_slice(b).map(Effect::TrustlineCreated)
        })
        .register("trustline_removed", |b| {
            serde_json::from_slice(b).map(Effect::TrustlineRemoved)
        })
        .register("trustline_updated", |b| {
            serde_json::from_slice(b).map(Effect::TrustlineUpdated)
        })
        .register("trustline_authorized", |b| {
            serde_json::from_slice(b).map(Effect::TrustlineAuthorized)
        })
        .register("trustline_deauthorized", |b| {
            serde_json::from_slice(b).map(Effect::TrustlineDeauthorized)
        })
        .register("trade", |b| serde_json::from_slice(b).map(Effect::Trade))
        .register("data_created", |b| {
            serde_json::from_slice(b).map(Effect::DataCreated)
        })
        .register("data_removed", |b| {
            serde_json::from_slice(b).map(Effect::DataRemoved)
        })
        .register("data_updated", |b| {
            serde_json::from_slice(b).map(Effect::DataUpdated)
        })
        .register("sequence_bumped", |b| {
            serde_json::from_slice(b).map(Effect::SequenceBumped)
        });
    registry
});

/// Decode one streamed effect payload.
pub fn decode_effect(payload: &[u8]) -> Result<Effect, StreamError> {
    EFFECTS.decode(payload)
}
