//! ACME client capability consumed by the selection core
//!
//! The core never talks to an ACME server. It only needs the two key
//! derivations an account-holding client can perform locally: the HTTP-01
//! key authorization and the DNS-01 TXT record value for a token.

use thiserror::Error;

/// Error returned by an [`AcmeClient`] implementation
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AcmeClientError {
    message: String,
}

impl AcmeClientError {
    /// Create an error carrying the client's failure message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Key derivation operations backed by an ACME account key
///
/// Implementations are expected to be self-contained and fast; both
/// operations derive a string from the token and the account key without
/// any network traffic.
pub trait AcmeClient {
    /// The key authorization served at the HTTP-01 well-known URL for `token`
    fn http01_response(&self, token: &str) -> Result<String, AcmeClientError>;

    /// The TXT record value published for a DNS-01 challenge on `token`
    fn dns01_record(&self, token: &str) -> Result<String, AcmeClientError>;
}
