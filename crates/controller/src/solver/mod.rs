//! Solver selection
//!
//! Turns an issuer's solver list and one authorization into the single best
//! `(solver, challenge)` pair. Enumeration pairs solvers with compatible
//! challenges, matching scores each pair's selector against the order, and
//! ranking reduces the survivors to one winner.

mod candidates;
mod matcher;
mod ranker;

pub use candidates::{enumerate_candidates, Candidate};
pub use matcher::{match_selector, SelectorMatch};

use certling_api::{Authorization, ChallengeSolver, Order};
use tracing::{debug, trace};

use crate::error::SelectionError;

/// Select the best solver for `authz` among `solvers`.
///
/// Returns the winning candidate together with its match record, or
/// [`SelectionError::NoMatchingSolver`] when no solver both answers an
/// offered challenge type and matches the order.
pub fn select_solver<'a>(
    solvers: &'a [ChallengeSolver],
    order: &Order,
    authz: &'a Authorization,
) -> Result<(Candidate<'a>, SelectorMatch), SelectionError> {
    let dns_name = authz.certificate_dns_name();

    trace!(
        identifier = %authz.identifier,
        dns_name = %dns_name,
        solver_count = solvers.len(),
        challenge_count = authz.challenges.len(),
        "Starting solver selection"
    );

    let mut survivors = Vec::new();
    for candidate in enumerate_candidates(solvers, authz) {
        match match_selector(candidate.solver.selector(), order, &dns_name) {
            Some(matches) => {
                trace!(
                    solver_index = candidate.index,
                    label_matches = matches.label_matches,
                    dns_name_matches = matches.dns_name_matches,
                    dns_zone_matches = matches.dns_zone_matches,
                    "Selector matched"
                );
                survivors.push((candidate, matches));
            }
            None => {
                trace!(
                    solver_index = candidate.index,
                    dns_name = %dns_name,
                    "Selector did not match order"
                );
            }
        }
    }

    match ranker::pick_best(survivors) {
        Some((candidate, matches)) => {
            debug!(
                identifier = %authz.identifier,
                solver_index = candidate.index,
                challenge_type = %candidate.challenge.challenge_type,
                dns_name_matches = matches.dns_name_matches,
                dns_zone_matches = matches.dns_zone_matches,
                label_matches = matches.label_matches,
                "Selected challenge solver"
            );
            Ok((candidate, matches))
        }
        None => {
            debug!(
                identifier = %authz.identifier,
                solver_count = solvers.len(),
                "No solver matched"
            );
            Err(SelectionError::NoMatchingSolver {
                identifier: authz.identifier.clone(),
            })
        }
    }
}
