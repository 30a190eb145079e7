//! Challenge specification
//!
//! The output of solver selection: everything a challenge executor needs to
//! present one proof of control to the ACME server.

use serde::{Deserialize, Serialize};

use crate::authorization::ChallengeType;
use crate::issuer::ChallengeSolver;

/// A fully resolved challenge, ready for execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeSpec {
    /// Challenge mechanism to present
    #[serde(rename = "type")]
    pub challenge_type: ChallengeType,

    /// Bare DNS name being proven, without any `*.` prefix
    pub dns_name: String,

    /// Whether the certificate SAN is the wildcard of `dns_name`
    #[serde(default)]
    pub wildcard: bool,

    /// Challenge token, copied verbatim from the authorization
    pub token: String,

    /// Key authorization to serve, or the TXT record value to publish
    pub key: String,

    /// The selected solver, with any per-order overrides applied. This is an
    /// owned copy; mutating it never touches the issuer configuration.
    pub solver: ChallengeSolver,
}
