//! Challenge-solver selection for the certling ACME controller
//!
//! Given an issuer's solver list, a certificate order, and one ACME
//! authorization, this crate decides which solver answers which challenge
//! and produces the [`ChallengeSpec`](certling_api::ChallengeSpec) a
//! downstream executor acts on.
//!
//! # Architecture
//!
//! Selection is a pure function built from four pieces:
//!
//! - [`solver::enumerate_candidates`] - pair each solver with a challenge it
//!   can answer
//! - [`solver`] matching - score each candidate's selector against the order
//!   and the authorization, or reject it
//! - [`solver::select_solver`] - rank surviving candidates and pick the
//!   single best
//! - [`challenge_spec_for_authorization`] - assemble the final challenge
//!   specification, compute the key through the [`AcmeClient`] capability,
//!   and apply per-order HTTP-01 overrides
//!
//! The core does no I/O and holds no state between calls; the only external
//! dependency is the injected [`AcmeClient`], which derives key material
//! from challenge tokens. Invoking it concurrently from several reconcilers
//! is safe as long as each call passes its own inputs.
//!
//! # Precedence
//!
//! Among matching solvers the winner is chosen by, in order: an exact
//! `dns_names` match, the longest matching `dns_zones` suffix, then the
//! number of matched labels. Selection is deterministic and independent of
//! the order solvers appear in the issuer configuration; only genuinely
//! equivalent solvers fall back to configuration order, and that situation
//! is logged as a warning.

pub mod challenge;
pub mod client;
mod error;
pub mod solver;

pub use challenge::{challenge_spec_for_authorization, challenge_specs_for_order};
pub use client::{AcmeClient, AcmeClientError};
pub use error::SelectionError;
