//! Challenge specification assembly
//!
//! Builds the final [`ChallengeSpec`] from the winning solver: derives the
//! challenge key through the ACME client capability, deep-clones the solver
//! so per-order overrides never touch the issuer configuration, and applies
//! the HTTP-01 override annotations.

use certling_api::{
    validation, AcmeIssuer, Authorization, ChallengeSpec, ChallengeSolver, ChallengeType,
    Http01Override, Order, SolverConfig,
};
use tracing::debug;

use crate::client::AcmeClient;
use crate::error::SelectionError;
use crate::solver;

/// Compute the challenge specification for one authorization.
///
/// This is the selection core's entry point: validate the inputs, pick the
/// best solver, derive the key, and assemble the specification. The
/// returned solver is an owned copy of the issuer's; callers may mutate it
/// freely.
pub fn challenge_spec_for_authorization(
    client: &dyn AcmeClient,
    issuer: &AcmeIssuer,
    order: &Order,
    authz: &Authorization,
) -> Result<ChallengeSpec, SelectionError> {
    validation::validate_issuer(issuer)?;
    validation::validate_authorization(authz)?;

    let (candidate, _) = solver::select_solver(&issuer.solvers, order, authz)?;
    let challenge_type = candidate.challenge.challenge_type;
    let token = candidate.challenge.token.clone();

    let key = match challenge_type {
        ChallengeType::Http01 => client.http01_response(&token),
        ChallengeType::Dns01 => client.dns01_record(&token),
    }
    .map_err(|source| SelectionError::KeyComputation {
        identifier: authz.identifier.clone(),
        source,
    })?;

    let mut chosen = candidate.solver.clone();
    if challenge_type == ChallengeType::Http01 {
        apply_http01_overrides(&mut chosen, order, &authz.identifier)?;
    }

    Ok(ChallengeSpec {
        challenge_type,
        dns_name: authz.identifier.clone(),
        wildcard: authz.wildcard,
        token,
        key,
        solver: chosen,
    })
}

/// Compute challenge specifications for every authorization of an order.
///
/// Fails on the first authorization that cannot be resolved; partial
/// results are discarded.
pub fn challenge_specs_for_order(
    client: &dyn AcmeClient,
    issuer: &AcmeIssuer,
    order: &Order,
    authorizations: &[Authorization],
) -> Result<Vec<ChallengeSpec>, SelectionError> {
    let mut specs = Vec::with_capacity(authorizations.len());
    for authz in authorizations {
        specs.push(challenge_spec_for_authorization(client, issuer, order, authz)?);
    }
    Ok(specs)
}

/// Apply the HTTP-01 override annotations to the cloned solver.
///
/// Setting one override clears the other ingress field, so the executor
/// sees a single unambiguous target. Both set at once is a configuration
/// conflict.
fn apply_http01_overrides(
    solver: &mut ChallengeSolver,
    order: &Order,
    identifier: &str,
) -> Result<(), SelectionError> {
    let SolverConfig::Http01(http01) = &mut solver.config else {
        return Ok(());
    };

    let parsed = order
        .http01_override()
        .map_err(|_| SelectionError::ConflictingOverrides {
            identifier: identifier.to_string(),
        })?;

    match parsed {
        Some(Http01Override::IngressName(name)) => {
            debug!(identifier = %identifier, ingress_name = %name, "Applying ingress name override");
            http01.ingress.name = Some(name);
            http01.ingress.class = None;
        }
        Some(Http01Override::IngressClass(class)) => {
            debug!(identifier = %identifier, ingress_class = %class, "Applying ingress class override");
            http01.ingress.class = Some(class);
            http01.ingress.name = None;
        }
        None => {}
    }

    Ok(())
}
