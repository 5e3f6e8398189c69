use crate::models::FlightRule;
use std::collections::BTreeSet;

/// Allowed cargo weight range for a destination, across all its flights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityRange {
    pub min: f64,
    pub max: f64,
    pub flights: usize,
}

/// Distinct destinations as written in the rule set, sorted.
pub fn destinations(rules: &[FlightRule]) -> Vec<String> {
    rules
        .iter()
        .map(|r| r.destination.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Smallest and largest `max_weight` among flights to `destination`,
/// regardless of departure time.
pub fn capacity_range(rules: &[FlightRule], destination: &str) -> Option<CapacityRange> {
    let key = destination.trim().to_lowercase();

    rules
        .iter()
        .filter(|r| r.destination_key() == key)
        .fold(None, |range: Option<CapacityRange>, rule| {
            Some(match range {
                None => CapacityRange {
                    min: rule.max_weight,
                    max: rule.max_weight,
                    flights: 1,
                },
                Some(r) => CapacityRange {
                    min: r.min.min(rule.max_weight),
                    max: r.max.max(rule.max_weight),
                    flights: r.flights + 1,
                },
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<FlightRule> {
        vec![
            FlightRule::new("F1", "Paris", 500.0, "10:00", 1.0),
            FlightRule::new("F2", "London", 300.0, "10:00", 1.0),
            FlightRule::new("F3", "paris", 200.0, "10:00", 1.0),
            FlightRule::new("F4", "Paris", 800.0, "10:00", 1.0),
        ]
    }

    #[test]
    fn destinations_are_sorted_and_unique() {
        assert_eq!(destinations(&rules()), vec!["London", "Paris", "paris"]);
        assert!(destinations(&[]).is_empty());
    }

    #[test]
    fn capacity_range_spans_destination() {
        let range = capacity_range(&rules(), "PARIS").unwrap();
        assert_eq!(range.min, 200.0);
        assert_eq!(range.max, 800.0);
        assert_eq!(range.flights, 3);
    }

    #[test]
    fn capacity_range_unknown_destination() {
        assert_eq!(capacity_range(&rules(), "Tokyo"), None);
    }
}
