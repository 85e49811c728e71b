use super::Endpoint;
use crate::error::BuildError;

/// Submission of a signed transaction envelope, base64 XDR encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub transaction_xdr: String,
}

impl SubmitRequest {
    pub fn new(transaction_xdr: impl Into<String>) -> Self {
        Self {
            transaction_xdr: transaction_xdr.into(),
        }
    }
}

impl Endpoint for SubmitRequest {
    fn path(&self) -> Result<String, BuildError> {
        if self.transaction_xdr.is_empty() {
            return Err(BuildError::TooFewParameters);
        }
        Ok("transactions".to_string())
    }

    fn build_url(&self) -> Result<String, BuildError> {
        let path = self.path()?;
        Ok(format!(
            "{}?tx={}",
            path,
            urlencoding::encode(&self.transaction_xdr)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_envelope() {
        let request = SubmitRequest::new("AAAA+/w==");
        assert_eq!(
            request.build_url().unwrap(),
            "transactions?tx=AAAA%2B%2Fw%3D%3D"
        );
    }

    #[test]
    fn test_empty_envelope_is_too_few_parameters() {
        let err = SubmitRequest::new("").build_url().unwrap_err();
        assert_eq!(err.to_string(), "Invalid request. Too few parameters");
    }
}
