use crate::models::Candidate;
use std::cmp::Ordering;

/// Ranking policy: least surplus capacity first, then lowest carbon footprint.
///
/// Changing the business preference between the two keys means changing
/// this function only.
///
/// Keys compare numerically, so `-0.0` and `0.0` tie. NaN never reaches here:
/// rules and queries are validated first.
pub fn compare(a: &Candidate, b: &Candidate) -> Ordering {
    numeric(a.surplus, b.surplus)
        .then_with(|| numeric(a.rule.carbon_footprint, b.rule.carbon_footprint))
}

fn numeric(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Orders candidates best first. Exact ties keep their input order.
pub fn rank(mut candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    candidates.sort_by(compare);
    candidates
}
