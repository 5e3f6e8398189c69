use super::availability::is_available;
use crate::models::{Candidate, CargoQuery, FlightRule};
use chrono::NaiveDateTime;

/// Flights that serve the query's destination, can carry its weight and have
/// not departed yet, in rule-set order.
///
/// The query is assumed valid; [`super::DecisionEngine`] checks it first.
pub fn filter_candidates<'a>(
    rules: &'a [FlightRule],
    query: &CargoQuery,
    now: NaiveDateTime,
) -> Vec<Candidate<'a>> {
    let destination = query.destination_key();

    rules
        .iter()
        .filter(|rule| rule.destination_key() == destination)
        .filter(|rule| query.weight <= rule.max_weight)
        .filter(|rule| is_available(rule, now))
        .map(|rule| Candidate::new(rule, query.weight))
        .collect()
}
