//! Typed API objects for the certling ACME controller
//!
//! This crate defines the data model shared by the certling components:
//! issuer configuration (challenge solvers and their selectors), certificate
//! orders, ACME authorizations, and the challenge specification produced by
//! the solver selection core.
//!
//! # Module Organization
//!
//! - [`issuer`]: ACME issuer configuration, solvers, and selectors
//! - [`order`]: Certificate orders (labels, annotations, DNS names)
//! - [`authorization`]: ACME authorizations and challenges
//! - [`challenge`]: The challenge specification handed to challenge executors
//! - [`annotations`]: Recognized order annotation names
//! - [`validation`]: Semantic validation of issuers and authorizations
//!
//! All types serialize with serde. The solver challenge configuration is a
//! tagged variant ([`issuer::SolverConfig`]), so a solver statically carries
//! exactly one of an HTTP-01 or a DNS-01 configuration while the serialized
//! form keeps the familiar sibling `http01` / `dns01` keys.

pub mod annotations;
pub mod authorization;
pub mod challenge;
pub mod issuer;
pub mod order;
pub mod validation;

// ============================================================================
// Re-exports
// ============================================================================

// Authorizations
pub use authorization::{AcmeChallenge, Authorization, ChallengeType};

// Challenge specification
pub use challenge::ChallengeSpec;

// Issuer configuration
pub use issuer::{
    AcmeIssuer, ChallengeSolver, CloudflareProvider, Dns01Provider, Dns01Solver,
    Http01IngressSolver, Http01Solver, Route53Provider, SolverConfig, SolverSelector,
    WebhookProvider,
};

// Orders
pub use order::{Http01Override, Order, OverrideConflict};

// Validation
pub use validation::ValidationError;
