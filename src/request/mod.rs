//! Request descriptors.
//!
//! Each descriptor maps a sparse set of filters onto one canonical resource
//! path plus query string. Identifying filters (account, ledger, operation,
//! transaction) are mutually exclusive; setting more than one is a
//! [`BuildError::TooManyParameters`], reported before any I/O.

mod accounts;
mod effects;
mod ledgers;
mod operations;
mod submit;
mod transactions;

pub use accounts::AccountRequest;
pub use effects::EffectRequest;
pub use ledgers::LedgerRequest;
pub use operations::{OperationRequest, OperationsEndpoint};
pub use submit::SubmitRequest;
pub use transactions::TransactionRequest;

use std::fmt;

use crate::error::{BuildError, StreamError};
use crate::records::Record;

/// Cursor value requesting only records created after the stream opens.
pub const CURSOR_NOW: &str = "now";

/// Sort order of a paged resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paging and filtering query parameters shared by collection resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub order: Option<Order>,
    pub include_failed: bool,
}

impl QueryParams {
    /// Encode as a query string, without the leading `?`.
    ///
    /// Parameters always appear in the order `cursor`, `limit`, `order`,
    /// `include_failed`. Unset values, empty cursors and a zero limit are
    /// left out.
    pub fn encode(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if let Some(cursor) = self.cursor.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(format!("cursor={}", urlencoding::encode(cursor)));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(format!("limit={}", limit));
        }
        if let Some(order) = self.order {
            pairs.push(format!("order={}", order));
        }
        if self.include_failed {
            pairs.push("include_failed=true".to_string());
        }

        pairs.join("&")
    }

    /// Use `cursor` unless a cursor is already set.
    pub fn ensure_cursor(&mut self, cursor: &str) {
        if self.cursor.as_deref().map_or(true, str::is_empty) {
            self.cursor = Some(cursor.to_string());
        }
    }
}

/// Count how many identifying filters are set.
pub fn count_params(filters: &[bool]) -> usize {
    filters.iter().filter(|set| **set).count()
}

/// A filter value, treating empty strings as unset.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A request descriptor that resolves to one endpoint.
pub trait Endpoint {
    /// Resource path relative to the service root, e.g. `accounts/G.../effects`.
    fn path(&self) -> Result<String, BuildError>;

    /// Query parameters for the request.
    fn query(&self) -> QueryParams {
        QueryParams::default()
    }

    /// Path plus encoded query string.
    fn build_url(&self) -> Result<String, BuildError> {
        let path = self.path()?;
        Ok(join(path, &self.query()))
    }

    /// Like [`build_url`](Endpoint::build_url), but always carrying a cursor.
    ///
    /// Streams need a starting position; `default_cursor` is used when the
    /// descriptor has none.
    fn stream_url(&self, default_cursor: &str) -> Result<String, BuildError> {
        let path = self.path()?;
        let mut query = self.query();
        query.ensure_cursor(default_cursor);
        Ok(join(path, &query))
    }
}

/// A descriptor whose resource can be streamed.
pub trait StreamRequest: Endpoint {
    /// Decode one event payload into a record.
    fn decode(&self, payload: &[u8]) -> Result<Record, StreamError>;
}

fn join(path: String, query: &QueryParams) -> String {
    let query = query.encode();
    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    }
}

/// Join an endpoint with the service base URL.
pub fn resolve(base: &str, endpoint: &str) -> Result<reqwest::Url, BuildError> {
    let base = reqwest::Url::parse(base).map_err(|e| BuildError::InvalidUrl(e.to_string()))?;
    base.join(endpoint)
        .map_err(|e| BuildError::InvalidUrl(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_encode_order() {
        let query = QueryParams {
            cursor: Some("123456".to_string()),
            limit: Some(30),
            order: Some(Order::Asc),
            include_failed: true,
        };
        assert_eq!(
            query.encode(),
            "cursor=123456&limit=30&order=asc&include_failed=true"
        );
    }

    #[test]
    fn test_query_params_skips_unset_values() {
        assert_eq!(QueryParams::default().encode(), "");

        let query = QueryParams {
            cursor: Some(String::new()),
            limit: Some(0),
            order: Some(Order::Desc),
            include_failed: false,
        };
        assert_eq!(query.encode(), "order=desc");
    }

    #[test]
    fn test_cursor_is_url_encoded() {
        let query = QueryParams {
            cursor: Some("2531135896703017-1 x".to_string()),
            ..Default::default()
        };
        assert_eq!(query.encode(), "cursor=2531135896703017-1%20x");
    }

    #[test]
    fn test_ensure_cursor_keeps_existing() {
        let mut query = QueryParams::default();
        query.ensure_cursor(CURSOR_NOW);
        assert_eq!(query.cursor.as_deref(), Some("now"));

        let mut query = QueryParams {
            cursor: Some("42".to_string()),
            ..Default::default()
        };
        query.ensure_cursor(CURSOR_NOW);
        assert_eq!(query.cursor.as_deref(), Some("42"));
    }

    #[test]
    fn test_count_params() {
        assert_eq!(count_params(&[]), 0);
        assert_eq!(count_params(&[true, false, true]), 2);
    }

    #[test]
    fn test_resolve_joins_with_base() {
        let url = resolve("https://localhost/", "effects?cursor=now").unwrap();
        assert_eq!(url.as_str(), "https://localhost/effects?cursor=now");

        let url = resolve("https://localhost/horizon/", "ledgers/5").unwrap();
        assert_eq!(url.as_str(), "https://localhost/horizon/ledgers/5");
    }

    #[test]
    fn test_resolve_rejects_bad_base() {
        assert!(matches!(
            resolve("not a url", "effects"),
            Err(BuildError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_order_display() {
        assert_eq!(Order::Asc.to_string(), "asc");
        assert_eq!(Order::Desc.as_str(), "desc");
    }
}
