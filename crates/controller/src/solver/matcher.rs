//! Selector matching
//!
//! Scores a solver's selector against an order and the certificate DNS name
//! of an authorization. The three selector dimensions are independent: each
//! either rejects the solver outright or contributes a score carried into
//! ranking.

use certling_api::{Order, SolverSelector};

/// Match record for one solver
///
/// All-zero means the selector placed no constraint; that is a valid match
/// (the catch-all default), just the weakest possible one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorMatch {
    /// Number of selector labels the order satisfied
    pub label_matches: usize,
    /// 1 when the selector names the certificate DNS name exactly
    pub dns_name_matches: usize,
    /// Character length of the longest matching DNS zone
    pub dns_zone_matches: usize,
}

impl SelectorMatch {
    /// Ranking key. An exact DNS name match beats any zone match, which
    /// beats any label count; each later dimension only breaks ties.
    pub(crate) fn rank_key(&self) -> (usize, usize, usize) {
        (
            self.dns_name_matches,
            self.dns_zone_matches,
            self.label_matches,
        )
    }
}

/// Match `selector` against the order and the certificate DNS name.
///
/// `dns_name` is the SAN form: bare for ordinary authorizations and
/// `*.`-prefixed for wildcard ones. Returns `None` when any dimension
/// rejects the solver.
pub fn match_selector(
    selector: &SolverSelector,
    order: &Order,
    dns_name: &str,
) -> Option<SelectorMatch> {
    let label_matches = match_labels(selector, order)?;
    let dns_name_matches = match_dns_names(selector, dns_name)?;
    let dns_zone_matches = match_dns_zones(selector, dns_name)?;

    Some(SelectorMatch {
        label_matches,
        dns_name_matches,
        dns_zone_matches,
    })
}

fn match_labels(selector: &SolverSelector, order: &Order) -> Option<usize> {
    if selector.match_labels.is_empty() {
        return Some(0);
    }
    for (key, value) in &selector.match_labels {
        if order.labels.get(key) != Some(value) {
            return None;
        }
    }
    Some(selector.match_labels.len())
}

fn match_dns_names(selector: &SolverSelector, dns_name: &str) -> Option<usize> {
    if selector.dns_names.is_empty() {
        return Some(0);
    }
    if selector.dns_names.iter().any(|name| name == dns_name) {
        Some(1)
    } else {
        None
    }
}

fn match_dns_zones(selector: &SolverSelector, dns_name: &str) -> Option<usize> {
    if selector.dns_zones.is_empty() {
        return Some(0);
    }
    // Zones constrain the bare domain; a wildcard SAN is inside the zone of
    // its base domain.
    let domain = dns_name.strip_prefix("*.").unwrap_or(dns_name);
    selector
        .dns_zones
        .iter()
        .filter(|zone| zone_matches(domain, zone))
        .map(|zone| zone.len())
        .max()
}

/// Whether `domain` equals `zone` or sits underneath it.
///
/// The suffix must start at a label boundary: zone `ample.com` does not
/// match `example.com`.
fn zone_matches(domain: &str, zone: &str) -> bool {
    domain == zone
        || (domain.ends_with(zone)
            && domain.len() > zone.len()
            && domain[..domain.len() - zone.len()].ends_with('.'))
}
