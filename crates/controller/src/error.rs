//! Error types for challenge-solver selection

use certling_api::{annotations, ValidationError};
use thiserror::Error;

use crate::client::AcmeClientError;

/// Errors surfaced by the selection core
///
/// Nothing is retried or recovered here; every failure is returned to the
/// caller unchanged.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// No configured solver can answer any challenge offered for the domain
    #[error("no configured challenge solvers can be used for domain '{identifier}'")]
    NoMatchingSolver { identifier: String },

    /// The order sets both HTTP-01 override annotations at once
    #[error(
        "both '{name}' and '{class}' are set on the order for domain '{identifier}', only one may be used",
        name = annotations::HTTP01_INGRESS_NAME_OVERRIDE,
        class = annotations::HTTP01_INGRESS_CLASS_OVERRIDE,
    )]
    ConflictingOverrides { identifier: String },

    /// The ACME client failed to derive the challenge key
    #[error("failed to compute challenge key for domain '{identifier}': {source}")]
    KeyComputation {
        identifier: String,
        #[source]
        source: AcmeClientError,
    },

    /// An input failed defensive validation
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ValidationError),
}
