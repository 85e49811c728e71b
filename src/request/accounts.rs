use super::{non_empty, Endpoint};
use crate::error::BuildError;

/// Single account request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountRequest {
    pub account_id: Option<String>,
}

impl AccountRequest {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
        }
    }
}

impl Endpoint for AccountRequest {
    fn path(&self) -> Result<String, BuildError> {
        non_empty(&self.account_id)
            .map(|account| format!("accounts/{}", account))
            .ok_or(BuildError::TooFewParameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        assert_eq!(
            AccountRequest::new("GABC").build_url().unwrap(),
            "accounts/GABC"
        );
    }

    #[test]
    fn test_missing_account_is_too_few_parameters() {
        assert_eq!(
            AccountRequest::default().build_url(),
            Err(BuildError::TooFewParameters)
        );
        assert_eq!(
            AccountRequest::new("").build_url(),
            Err(BuildError::TooFewParameters)
        );
    }
}
