//! Shared fixtures for challenge selection tests
//!
//! Builders for issuers, solvers, orders, and authorizations, plus a fake
//! ACME client that derives fixed key material.

#![allow(dead_code)]

use std::collections::HashMap;

use certling_api::{
    AcmeChallenge, AcmeIssuer, Authorization, ChallengeSolver, ChallengeType, CloudflareProvider,
    Dns01Provider, Dns01Solver, Http01IngressSolver, Http01Solver, Order, SolverConfig,
    SolverSelector,
};
use certling_controller::{AcmeClient, AcmeClientError};

/// Fake ACME client returning fixed key material
pub struct FakeAcme;

impl AcmeClient for FakeAcme {
    fn http01_response(&self, _token: &str) -> Result<String, AcmeClientError> {
        Ok("http01".to_string())
    }

    fn dns01_record(&self, _token: &str) -> Result<String, AcmeClientError> {
        Ok("dns01".to_string())
    }
}

/// Fake ACME client whose key derivations always fail
pub struct FailingAcme;

impl AcmeClient for FailingAcme {
    fn http01_response(&self, _token: &str) -> Result<String, AcmeClientError> {
        Err(AcmeClientError::new("account key unavailable"))
    }

    fn dns01_record(&self, _token: &str) -> Result<String, AcmeClientError> {
        Err(AcmeClientError::new("account key unavailable"))
    }
}

// ============================================================================
// Solver Builders
// ============================================================================

/// HTTP-01 solver with the given selector, identified by its ingress name
pub fn http01_solver(selector: Option<SolverSelector>, ingress_name: &str) -> ChallengeSolver {
    ChallengeSolver {
        selector,
        config: SolverConfig::Http01(Http01Solver {
            ingress: Http01IngressSolver {
                name: Some(ingress_name.to_string()),
                ..Default::default()
            },
        }),
    }
}

/// DNS-01 solver with the given selector, identified by its provider email
pub fn dns01_solver(selector: Option<SolverSelector>, email: &str) -> ChallengeSolver {
    ChallengeSolver {
        selector,
        config: SolverConfig::Dns01(Dns01Solver {
            provider: Dns01Provider::Cloudflare(CloudflareProvider {
                email: email.to_string(),
                api_token_secret: None,
            }),
        }),
    }
}

/// Selector constraining only labels
pub fn label_selector(pairs: &[(&str, &str)]) -> SolverSelector {
    SolverSelector {
        match_labels: string_map(pairs),
        ..Default::default()
    }
}

/// Selector constraining only DNS names
pub fn dns_name_selector(names: &[&str]) -> SolverSelector {
    SolverSelector {
        dns_names: names.iter().map(|n| n.to_string()).collect(),
        ..Default::default()
    }
}

/// Selector constraining only DNS zones
pub fn dns_zone_selector(zones: &[&str]) -> SolverSelector {
    SolverSelector {
        dns_zones: zones.iter().map(|z| z.to_string()).collect(),
        ..Default::default()
    }
}

// ============================================================================
// Issuer / Order / Authorization Builders
// ============================================================================

pub fn issuer(solvers: Vec<ChallengeSolver>) -> AcmeIssuer {
    AcmeIssuer { solvers }
}

pub fn order(dns_names: &[&str]) -> Order {
    Order {
        labels: HashMap::new(),
        annotations: HashMap::new(),
        dns_names: dns_names.iter().map(|n| n.to_string()).collect(),
    }
}

pub fn order_with_labels(dns_names: &[&str], labels: &[(&str, &str)]) -> Order {
    Order {
        labels: string_map(labels),
        ..order(dns_names)
    }
}

pub fn order_with_annotations(dns_names: &[&str], annotations: &[(&str, &str)]) -> Order {
    Order {
        annotations: string_map(annotations),
        ..order(dns_names)
    }
}

pub fn authorization(
    identifier: &str,
    wildcard: bool,
    challenges: Vec<AcmeChallenge>,
) -> Authorization {
    Authorization {
        identifier: identifier.to_string(),
        wildcard,
        challenges,
    }
}

pub fn http01_challenge() -> AcmeChallenge {
    AcmeChallenge {
        challenge_type: ChallengeType::Http01,
        token: "http-01-token".to_string(),
    }
}

pub fn dns01_challenge() -> AcmeChallenge {
    AcmeChallenge {
        challenge_type: ChallengeType::Dns01,
        token: "dns-01-token".to_string(),
    }
}

fn string_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
