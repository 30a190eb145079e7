//! Semantic validation for issuers and authorizations
//!
//! Structural constraints (a solver carrying exactly one challenge arm) are
//! enforced by the types themselves; this module covers the semantic checks
//! that types cannot express. Surrounding layers normally reject these
//! configurations before they reach the selection core, so every check here
//! is defensive.

use thiserror::Error;
use validator::Validate;

use crate::authorization::Authorization;
use crate::issuer::{AcmeIssuer, SolverConfig};

/// A semantic validation failure
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The authorization offers no challenges to answer
    #[error("authorization for '{identifier}' offers no challenges")]
    NoChallenges { identifier: String },

    /// A selector lists an empty DNS zone
    #[error("solver {index}: dns_zones entries must not be empty")]
    EmptyDnsZone { index: usize },

    /// A selector lists a wildcard DNS zone; zones are bare suffixes
    #[error("solver {index}: dns_zone '{zone}' must not carry a '*.' prefix")]
    WildcardDnsZone { index: usize, zone: String },

    /// A DNS provider configuration failed field validation
    #[error("solver {index}: invalid DNS provider configuration: {source}")]
    Provider {
        index: usize,
        #[source]
        source: validator::ValidationErrors,
    },
}

/// Validate an issuer configuration.
///
/// Checks that selector zones are well-formed and that DNS provider
/// settings pass field validation. An issuer without solvers is not a
/// validation failure; selection reports it as an ordinary no-match.
pub fn validate_issuer(issuer: &AcmeIssuer) -> Result<(), ValidationError> {
    for (index, solver) in issuer.solvers.iter().enumerate() {
        for zone in &solver.selector().dns_zones {
            if zone.is_empty() {
                return Err(ValidationError::EmptyDnsZone { index });
            }
            if zone.starts_with("*.") {
                return Err(ValidationError::WildcardDnsZone {
                    index,
                    zone: zone.clone(),
                });
            }
        }

        if let SolverConfig::Dns01(dns01) = &solver.config {
            dns01
                .provider
                .validate()
                .map_err(|source| ValidationError::Provider { index, source })?;
        }
    }

    Ok(())
}

/// Validate an authorization before solver selection.
pub fn validate_authorization(authz: &Authorization) -> Result<(), ValidationError> {
    if authz.challenges.is_empty() {
        return Err(ValidationError::NoChallenges {
            identifier: authz.identifier.clone(),
        });
    }
    Ok(())
}
