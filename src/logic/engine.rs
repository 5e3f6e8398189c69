use super::{explain::explain_ranking, filter::filter_candidates, ranking::rank};
use crate::error::Result;
use crate::models::{Candidate, CargoQuery, Decision, FlightRule};
use chrono::NaiveDateTime;
use tracing::debug;

pub const NO_MATCH_REASON: &str = "no eligible record for given destination/weight/time";

/// Picks the best flight for a shipment.
///
/// Holds no state between calls; the rule set is a borrowed snapshot, so one
/// engine can serve concurrent queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine;

impl DecisionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Every eligible flight, best first.
    pub fn ranked<'a>(
        &self,
        rules: &'a [FlightRule],
        query: &CargoQuery,
        now: NaiveDateTime,
    ) -> Result<Vec<Candidate<'a>>> {
        query.validate()?;

        let candidates = filter_candidates(rules, query, now);
        debug!(
            destination = %query.destination,
            weight = query.weight,
            rules = rules.len(),
            candidates = candidates.len(),
            "Filtered flights"
        );

        Ok(rank(candidates))
    }

    pub fn decide(
        &self,
        rules: &[FlightRule],
        query: &CargoQuery,
        now: NaiveDateTime,
    ) -> Result<Decision> {
        let ranked = self.ranked(rules, query, now)?;

        let (Some(best), Some(explanation)) = (ranked.first(), explain_ranking(&ranked)) else {
            debug!(destination = %query.destination, weight = query.weight, "No eligible flight");
            return Ok(Decision::NoMatch {
                reason: NO_MATCH_REASON.to_string(),
            });
        };

        debug!(flight = %best.rule.flight, surplus = best.surplus, "Selected flight");
        Ok(Decision::Selected {
            flight: best.rule.clone(),
            surplus: best.surplus,
            explanation,
        })
    }
}
