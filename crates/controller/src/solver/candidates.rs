//! Candidate enumeration
//!
//! Pairs each configured solver with a challenge it can answer. A solver
//! configures exactly one mechanism, so it contributes at most one
//! candidate: the first offered challenge of its type.

use certling_api::{AcmeChallenge, Authorization, ChallengeSolver};
use tracing::trace;

/// A solver paired with a compatible challenge
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Position of the solver in the issuer's list. Used only to break ties
    /// between otherwise equivalent solvers.
    pub index: usize,
    /// The solver configuration, borrowed from the issuer
    pub solver: &'a ChallengeSolver,
    /// The challenge this solver would answer
    pub challenge: &'a AcmeChallenge,
}

/// Enumerate every compatible `(solver, challenge)` pair.
///
/// Solvers whose mechanism the authorization does not offer are skipped.
/// The result preserves solver-list order and may be empty.
pub fn enumerate_candidates<'a>(
    solvers: &'a [ChallengeSolver],
    authz: &'a Authorization,
) -> Vec<Candidate<'a>> {
    let mut candidates = Vec::with_capacity(solvers.len());

    for (index, solver) in solvers.iter().enumerate() {
        let wanted = solver.challenge_type();
        match authz
            .challenges
            .iter()
            .find(|challenge| challenge.challenge_type == wanted)
        {
            Some(challenge) => {
                candidates.push(Candidate {
                    index,
                    solver,
                    challenge,
                });
            }
            None => {
                trace!(
                    solver_index = index,
                    challenge_type = %wanted,
                    identifier = %authz.identifier,
                    "Authorization offers no challenge this solver can answer"
                );
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use certling_api::{
        ChallengeType, CloudflareProvider, Dns01Provider, Dns01Solver, Http01IngressSolver,
        Http01Solver, SolverConfig,
    };

    fn http01_solver() -> ChallengeSolver {
        ChallengeSolver {
            selector: None,
            config: SolverConfig::Http01(Http01Solver {
                ingress: Http01IngressSolver::default(),
            }),
        }
    }

    fn dns01_solver() -> ChallengeSolver {
        ChallengeSolver {
            selector: None,
            config: SolverConfig::Dns01(Dns01Solver {
                provider: Dns01Provider::Cloudflare(CloudflareProvider {
                    email: "dns-admin@example.com".to_string(),
                    api_token_secret: None,
                }),
            }),
        }
    }

    fn challenge(challenge_type: ChallengeType, token: &str) -> AcmeChallenge {
        AcmeChallenge {
            challenge_type,
            token: token.to_string(),
        }
    }

    #[test]
    fn pairs_solvers_with_their_challenge_type() {
        let solvers = vec![http01_solver(), dns01_solver()];
        let authz = Authorization {
            identifier: "example.com".to_string(),
            wildcard: false,
            challenges: vec![
                challenge(ChallengeType::Dns01, "dns-tok"),
                challenge(ChallengeType::Http01, "http-tok"),
            ],
        };

        let candidates = enumerate_candidates(&solvers, &authz);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].index, 0);
        assert_eq!(candidates[0].challenge.token, "http-tok");
        assert_eq!(candidates[1].index, 1);
        assert_eq!(candidates[1].challenge.token, "dns-tok");
    }

    #[test]
    fn incompatible_solvers_are_absent() {
        let solvers = vec![dns01_solver()];
        let authz = Authorization {
            identifier: "example.com".to_string(),
            wildcard: false,
            challenges: vec![challenge(ChallengeType::Http01, "http-tok")],
        };

        assert!(enumerate_candidates(&solvers, &authz).is_empty());
    }

    #[test]
    fn first_challenge_of_a_type_wins() {
        let solvers = vec![http01_solver()];
        let authz = Authorization {
            identifier: "example.com".to_string(),
            wildcard: false,
            challenges: vec![
                challenge(ChallengeType::Http01, "first"),
                challenge(ChallengeType::Http01, "second"),
            ],
        };

        let candidates = enumerate_candidates(&solvers, &authz);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].challenge.token, "first");
    }

    #[test]
    fn empty_solver_list_yields_no_candidates() {
        let authz = Authorization {
            identifier: "example.com".to_string(),
            wildcard: false,
            challenges: vec![challenge(ChallengeType::Http01, "tok")],
        };
        assert!(enumerate_candidates(&[], &authz).is_empty());
    }
}
