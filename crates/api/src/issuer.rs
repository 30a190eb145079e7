//! ACME issuer configuration types
//!
//! An issuer lists one or more challenge solvers. Each solver may carry a
//! selector restricting which orders it applies to, and configures exactly
//! one challenge mechanism (HTTP-01 via an ingress, or DNS-01 via a DNS
//! provider).

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::authorization::ChallengeType;

// ============================================================================
// Issuer and Solvers
// ============================================================================

/// ACME issuer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcmeIssuer {
    /// Challenge solvers, in configuration order
    #[serde(default)]
    pub solvers: Vec<ChallengeSolver>,
}

/// A configured challenge solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeSolver {
    /// Restricts which orders this solver applies to. A solver without a
    /// selector (or with an empty one) acts as the catch-all default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<SolverSelector>,

    /// Challenge configuration, exactly one mechanism
    #[serde(flatten)]
    pub config: SolverConfig,
}

impl ChallengeSolver {
    /// The challenge type this solver can answer
    pub fn challenge_type(&self) -> ChallengeType {
        self.config.challenge_type()
    }

    /// The solver's selector, treating an absent selector as empty
    pub fn selector(&self) -> &SolverSelector {
        static EMPTY: OnceLock<SolverSelector> = OnceLock::new();
        self.selector
            .as_ref()
            .unwrap_or_else(|| EMPTY.get_or_init(SolverSelector::default))
    }
}

/// Challenge configuration carried by a solver
///
/// Serialized with the external `http01` / `dns01` tag as a sibling of the
/// `selector` key, so a document configuring both mechanisms on one solver
/// fails to deserialize instead of reaching the selection logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverConfig {
    /// Answer HTTP-01 challenges by editing or creating an ingress
    Http01(Http01Solver),
    /// Answer DNS-01 challenges through a DNS provider
    Dns01(Dns01Solver),
}

impl SolverConfig {
    /// The challenge type this configuration answers
    pub fn challenge_type(&self) -> ChallengeType {
        match self {
            Self::Http01(_) => ChallengeType::Http01,
            Self::Dns01(_) => ChallengeType::Dns01,
        }
    }
}

// ============================================================================
// Selectors
// ============================================================================

/// Predicate restricting which orders a solver applies to
///
/// The three dimensions are independent. An empty dimension places no
/// constraint; an all-empty selector behaves exactly like an absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverSelector {
    /// Labels that must all be present on the order with matching values
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub match_labels: HashMap<String, String>,

    /// Certificate DNS names this solver applies to, matched verbatim
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_names: Vec<String>,

    /// DNS zone suffixes this solver applies to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_zones: Vec<String>,
}

impl SolverSelector {
    /// Whether the selector places no constraint at all
    pub fn is_empty(&self) -> bool {
        self.match_labels.is_empty() && self.dns_names.is_empty() && self.dns_zones.is_empty()
    }
}

// ============================================================================
// HTTP-01
// ============================================================================

/// HTTP-01 challenge configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Http01Solver {
    /// Ingress-based challenge serving
    pub ingress: Http01IngressSolver,
}

/// Ingress settings for an HTTP-01 solver
///
/// `name` points at an existing ingress to edit; `class` selects the class
/// of a solver-managed ingress. At most one is meaningful at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Http01IngressSolver {
    /// Name of an existing ingress to edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Ingress class for a solver-managed ingress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Service type fronting the solver pods (e.g. "NodePort")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

// ============================================================================
// DNS-01
// ============================================================================

/// DNS-01 challenge configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dns01Solver {
    /// DNS provider used to publish challenge TXT records
    #[serde(flatten)]
    pub provider: Dns01Provider,
}

/// DNS provider configuration for DNS-01 solvers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dns01Provider {
    /// Cloudflare DNS API
    Cloudflare(CloudflareProvider),
    /// AWS Route 53
    Route53(Route53Provider),
    /// Generic webhook for out-of-tree providers
    Webhook(WebhookProvider),
}

impl validator::Validate for Dns01Provider {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            Self::Cloudflare(p) => p.validate(),
            Self::Route53(p) => p.validate(),
            Self::Webhook(p) => p.validate(),
        }
    }
}

/// Cloudflare provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CloudflareProvider {
    /// Account email the API token belongs to
    #[validate(email)]
    pub email: String,

    /// Name of the secret holding the API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token_secret: Option<String>,
}

/// Route 53 provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Route53Provider {
    /// AWS region hosting the zone
    #[validate(length(min = 1))]
    pub region: String,

    /// Explicit hosted zone ID, skipping zone discovery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,
}

/// Webhook provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WebhookProvider {
    /// Endpoint implementing the webhook record API
    #[validate(url)]
    pub url: String,

    /// Solver name the webhook dispatches on
    #[validate(length(min = 1))]
    pub solver_name: String,
}
