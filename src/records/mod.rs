//! Ledger records served by Horizon.
//!
//! Operations and effects are heterogeneous: the `type` field of each JSON
//! object selects the concrete shape. They are decoded in two stages through
//! a [`Registry`]. Transactions and ledgers have a single shape and decode
//! directly.

pub mod account;
pub mod effects;
pub mod ledger;
pub mod operations;
mod registry;
pub mod transaction;

pub use account::{Account, Balance, TransactionSuccess};
pub use effects::{decode_effect, Effect, EffectBase, EFFECTS};
pub use ledger::Ledger;
pub use operations::{decode_operation, Operation, OperationBase, OPERATIONS};
pub use registry::{Decoder, Registry};
pub use transaction::Transaction;

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Hypermedia link attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub templated: bool,
}

/// Links keyed by relation name (`self`, `next`, `transaction`, ...).
pub type Links = HashMap<String, Link>;

/// Asset identity, flattened into records as `asset_type`, `asset_code`
/// and `asset_issuer`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
}

impl Asset {
    pub fn is_native(&self) -> bool {
        self.asset_type == "native"
    }
}

/// A streamed record, as handed to [`HorizonClient::stream`](crate::HorizonClient::stream)
/// handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Operation(Operation),
    Effect(Effect),
    Transaction(Transaction),
    Ledger(Ledger),
}

impl Record {
    /// Record family name.
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Operation(_) => "operation",
            Record::Effect(_) => "effect",
            Record::Transaction(_) => "transaction",
            Record::Ledger(_) => "ledger",
        }
    }

    /// Cursor value positioned at this record.
    pub fn paging_token(&self) -> &str {
        match self {
            Record::Operation(op) => &op.base().paging_token,
            Record::Effect(effect) => &effect.base().paging_token,
            Record::Transaction(tx) => &tx.paging_token,
            Record::Ledger(ledger) => &ledger.paging_token,
        }
    }
}

/// One page of a collection resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "_links", default)]
    pub links: PageLinks,
    #[serde(rename = "_embedded")]
    pub embedded: Embedded<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedded<T> {
    pub records: Vec<T>,
}

impl<T> Page<T> {
    pub fn records(&self) -> &[T] {
        &self.embedded.records
    }

    pub fn into_records(self) -> Vec<T> {
        self.embedded.records
    }

    pub fn next_href(&self) -> Option<&str> {
        self.links.next.as_ref().map(|l| l.href.as_str())
    }

    pub fn prev_href(&self) -> Option<&str> {
        self.links.prev.as_ref().map(|l| l.href.as_str())
    }

    /// Convert the records, keeping the page links.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let records = self
            .embedded
            .records
            .into_iter()
            .map(f)
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Page {
            links: self.links,
            embedded: Embedded { records },
        })
    }
}

/// Helper to deserialize numeric identifiers sent either as string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize nullable strings as empty string
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
