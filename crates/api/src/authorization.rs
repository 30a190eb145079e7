//! ACME authorization and challenge types
//!
//! An authorization is the ACME server's demand that the client prove
//! control over a single identifier, together with the menu of challenge
//! types the server will accept.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Challenge mechanism offered by the ACME server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeType {
    /// Serve a key authorization at a well-known HTTP URL
    #[serde(rename = "http-01")]
    Http01,
    /// Publish a TXT record under `_acme-challenge.<domain>`
    #[serde(rename = "dns-01")]
    Dns01,
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http01 => write!(f, "http-01"),
            Self::Dns01 => write!(f, "dns-01"),
        }
    }
}

/// A single challenge offered within an authorization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcmeChallenge {
    /// Challenge mechanism
    #[serde(rename = "type")]
    pub challenge_type: ChallengeType,

    /// Server-issued token for this challenge
    pub token: String,
}

/// One ACME authorization returned by the server
///
/// The identifier is always the bare DNS name. For wildcard certificates the
/// server sets `wildcard` and the identifier carries no `*.` prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authorization {
    /// Bare DNS name subject to this authorization
    pub identifier: String,

    /// Whether the certificate SAN is `*.<identifier>`
    #[serde(default)]
    pub wildcard: bool,

    /// Challenges the server will accept, in server order
    #[serde(default)]
    pub challenges: Vec<AcmeChallenge>,
}

impl Authorization {
    /// The DNS name as it appears in the certificate being ordered.
    ///
    /// Wildcard authorizations carry the bare identifier on the wire, so the
    /// `*.` prefix is restored here. Solver selectors list certificate SANs
    /// in their `dns_names` field and are matched against this form.
    pub fn certificate_dns_name(&self) -> Cow<'_, str> {
        if self.wildcard {
            Cow::Owned(format!("*.{}", self.identifier))
        } else {
            Cow::Borrowed(&self.identifier)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_type_strings() {
        assert_eq!(ChallengeType::Http01.to_string(), "http-01");
        assert_eq!(ChallengeType::Dns01.to_string(), "dns-01");

        let parsed: ChallengeType = serde_json::from_str("\"http-01\"").unwrap();
        assert_eq!(parsed, ChallengeType::Http01);
        let parsed: ChallengeType = serde_json::from_str("\"dns-01\"").unwrap();
        assert_eq!(parsed, ChallengeType::Dns01);

        assert!(serde_json::from_str::<ChallengeType>("\"tls-alpn-01\"").is_err());
    }

    #[test]
    fn certificate_dns_name_restores_wildcard_prefix() {
        let authz = Authorization {
            identifier: "example.com".to_string(),
            wildcard: false,
            challenges: vec![],
        };
        assert_eq!(authz.certificate_dns_name(), "example.com");

        let authz = Authorization {
            identifier: "example.com".to_string(),
            wildcard: true,
            challenges: vec![],
        };
        assert_eq!(authz.certificate_dns_name(), "*.example.com");
    }

    #[test]
    fn authorization_deserializes_with_defaults() {
        let authz: Authorization = serde_json::from_value(serde_json::json!({
            "identifier": "example.com",
            "challenges": [{"type": "http-01", "token": "tok"}]
        }))
        .unwrap();

        assert!(!authz.wildcard);
        assert_eq!(authz.challenges.len(), 1);
        assert_eq!(authz.challenges[0].challenge_type, ChallengeType::Http01);
        assert_eq!(authz.challenges[0].token, "tok");
    }
}
