//! Precedence ranking
//!
//! Reduces the surviving candidates to a single winner with one pass over a
//! tuple key, so the result cannot depend on how the solver list happened to
//! be ordered.

use std::cmp::Ordering;

use tracing::warn;

use super::candidates::Candidate;
use super::matcher::SelectorMatch;

/// Pick the best candidate by rank key.
///
/// Keys compare lexicographically: an exact DNS name match dominates, then
/// the longest matched zone, then the matched label count. Candidates tying
/// on the whole key are equivalent; the earliest in solver-list order is
/// kept and the tie is logged, since such configurations are ambiguous.
pub(super) fn pick_best<'a>(
    survivors: Vec<(Candidate<'a>, SelectorMatch)>,
) -> Option<(Candidate<'a>, SelectorMatch)> {
    let mut best: Option<(Candidate<'a>, SelectorMatch)> = None;

    // `survivors` preserves solver-list order, so on a full-key tie the
    // incumbent is always the earlier solver.
    for (candidate, matches) in survivors {
        match &mut best {
            None => best = Some((candidate, matches)),
            Some((incumbent, incumbent_matches)) => {
                match matches.rank_key().cmp(&incumbent_matches.rank_key()) {
                    Ordering::Greater => {
                        *incumbent = candidate;
                        *incumbent_matches = matches;
                    }
                    Ordering::Equal => {
                        warn!(
                            kept_solver_index = incumbent.index,
                            discarded_solver_index = candidate.index,
                            "Multiple solvers match with equal specificity, keeping the first"
                        );
                    }
                    Ordering::Less => {}
                }
            }
        }
    }

    best
}
