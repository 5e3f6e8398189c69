use super::FlightRule;

/// A flight that passed the hard constraints for a query, with its headroom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub rule: &'a FlightRule,
    /// `max_weight - query.weight`, never negative.
    pub surplus: f64,
}

impl<'a> Candidate<'a> {
    pub fn new(rule: &'a FlightRule, weight: f64) -> Self {
        Self {
            rule,
            surplus: rule.max_weight - weight,
        }
    }
}

/// Outcome of a single decision.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Selected {
        flight: FlightRule,
        surplus: f64,
        explanation: String,
    },
    NoMatch {
        reason: String,
    },
}

impl Decision {
    pub fn selected(&self) -> Option<&FlightRule> {
        match self {
            Decision::Selected { flight, .. } => Some(flight),
            Decision::NoMatch { .. } => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Decision::Selected { .. })
    }

    /// Explanation for a selection or reason for no match.
    pub fn message(&self) -> &str {
        match self {
            Decision::Selected { explanation, .. } => explanation,
            Decision::NoMatch { reason } => reason,
        }
    }
}
